//! Suffix-link walk + ancestor walk from the query's terminal node, gated
//! by a length threshold.
//!
//! `a.substring_length()` is a lower bound on `LCSubstr(query, documents[id])`
//! for every `id` reached via `a`: the path from root to `a` spells a
//! substring of `query` that also occurs in each such document. Walking
//! parents enumerates shorter shared substrings; the suffix-link walk jumps
//! to the next maximal shared substring that appears later in `query`.
//! `min_len` prunes candidates that cannot satisfy the ratio regardless of
//! `|documents[id]|`.

use std::collections::BTreeSet;

use crate::error::{GstError, Result};
use crate::tree::GeneralizedSuffixTree;

impl GeneralizedSuffixTree {
    pub(crate) fn similar_impl(&self, query: &str, ratio: f64) -> Result<BTreeSet<u32>> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(GstError::InvalidRatio { ratio });
        }
        if !self.aggregation_valid {
            return Err(GstError::NotAggregatedError);
        }

        let min_len = (query.len() as f64 * ratio / 2.0).floor() as usize;
        let start = match self.search_node(query) {
            Some(n) => n,
            None => return Ok(BTreeSet::new()),
        };

        let mut result = BTreeSet::new();
        let mut current = Some(start);
        while let Some(cur) = current {
            if self.node(cur).substring_length() <= min_len {
                break;
            }
            let mut a = Some(cur);
            while let Some(an) = a {
                if self.node(an).substring_length() <= min_len {
                    break;
                }
                if let Some(ids) = self.node(an).aggregated_ids() {
                    let shared_len = self.node(an).substring_length() as f64;
                    for &id in ids {
                        if let Some(doc) = self.document(id) {
                            let sim = 2.0 * shared_len / (query.len() as f64 + doc.len() as f64);
                            if sim > ratio {
                                result.insert(id);
                            }
                        }
                    }
                }
                a = self.source_node(an);
            }
            current = self.node(cur).suffix();
        }
        Ok(result)
    }
}
