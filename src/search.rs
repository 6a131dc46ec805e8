//! Root-anchored exact substring search.

use std::collections::BTreeSet;

use crate::error::{GstError, Result};
use crate::node::NodeIdx;
use crate::tree::GeneralizedSuffixTree;

impl GeneralizedSuffixTree {
    pub(crate) fn search_impl(&self, query: &str) -> Result<BTreeSet<u32>> {
        if query.is_empty() {
            // Open question resolved in DESIGN.md: the empty query is
            // defined to return the empty set, independent of aggregation.
            return Ok(BTreeSet::new());
        }
        match self.search_node(query) {
            None => Ok(BTreeSet::new()),
            Some(node) => {
                if !self.aggregation_valid {
                    return Err(GstError::NotAggregatedError);
                }
                let ids = self
                    .node(node)
                    .aggregated_ids()
                    .expect("aggregation_valid implies every node has aggregated ids");
                Ok(ids.iter().copied().collect())
            }
        }
    }

    /// Walks from the root consuming as much of `query` as possible,
    /// returning the node the whole query lands on (possibly mid-edge),
    /// or `None` on a mismatch.
    pub(crate) fn search_node(&self, query: &str) -> Option<NodeIdx> {
        let q = query.as_bytes();
        if q.is_empty() {
            return None;
        }
        let mut node = NodeIdx::root();
        let mut i = 0;
        loop {
            let edge = self.node(node).edge(q[i])?;
            let label = self.edge(edge).label();
            let remaining = q.len() - i;
            let cmp_len = remaining.min(label.len());
            if &self.label_bytes(label)[..cmp_len] != &q[i..i + cmp_len] {
                return None;
            }
            i += cmp_len;
            if label.len() >= remaining {
                return Some(self.edge(edge).dest());
            }
            node = self.edge(edge).dest();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GstError;
    use crate::tree::GeneralizedSuffixTree;

    #[test]
    fn empty_query_is_always_empty_set() {
        let mut gst = GeneralizedSuffixTree::new();
        gst.insert("word", 0).unwrap();
        // No aggregate() call at all — empty query still must not error.
        assert!(gst.search("").unwrap().is_empty());
    }

    #[test]
    fn miss_does_not_require_aggregation() {
        let mut gst = GeneralizedSuffixTree::new();
        gst.insert("word", 0).unwrap();
        assert!(gst.search("xyz").unwrap().is_empty());
    }

    #[test]
    fn hit_without_aggregation_errors() {
        let mut gst = GeneralizedSuffixTree::new();
        gst.insert("word", 0).unwrap();
        assert_eq!(gst.search("wo").unwrap_err(), GstError::NotAggregatedError);
    }

    #[test]
    fn insert_after_aggregate_invalidates_it_again() {
        let mut gst = GeneralizedSuffixTree::new();
        gst.insert("word", 0).unwrap();
        gst.aggregate();
        assert!(gst.search("wo").is_ok());
        gst.insert("other", 1).unwrap();
        assert_eq!(gst.search("wo").unwrap_err(), GstError::NotAggregatedError);
    }
}
