//! The generalized suffix tree itself: the arena that owns every [`Node`]
//! and [`Edge`], plus the small amount of state the Builder carries across
//! `insert` calls.

use crate::document::DocumentTable;
use crate::edge::{BufferIdx, Edge, EdgeIdx, Label};
use crate::error::{GstError, Result};
use crate::node::{Node, NodeIdx};

/// Indexes a set of documents for exact substring lookup and approximate
/// similarity search.
///
/// ```
/// use gst_index::tree::GeneralizedSuffixTree;
///
/// let mut gst = GeneralizedSuffixTree::new();
/// gst.insert("cacao", 0).unwrap();
/// gst.aggregate();
/// assert_eq!(gst.search("ca").unwrap().into_iter().collect::<Vec<_>>(), vec![0]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneralizedSuffixTree {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    documents: DocumentTable,
    /// One frozen, immutable buffer per `insert` call, addressed by `Label`s
    /// created during that call. Kept separate from `documents` so a later
    /// `insert` repeating an id (which overwrites that id's entry in
    /// `documents`) cannot invalidate labels an earlier insertion already
    /// laid down (see `DESIGN.md`).
    buffers: Vec<String>,
    pub(crate) active_leaf: NodeIdx,
    pub(crate) last: u32,
    pub(crate) aggregation_valid: bool,
}

impl Default for GeneralizedSuffixTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneralizedSuffixTree {
    /// Creates an empty tree. The root always exists and occupies index 0.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
            edges: Vec::new(),
            documents: DocumentTable::new(),
            buffers: Vec::new(),
            active_leaf: NodeIdx::root(),
            last: 0,
            aggregation_valid: false,
        }
    }

    /// Inserts `key` under `id`. Ids must be passed in non-decreasing order;
    /// a repeated id is accepted.
    pub fn insert(&mut self, key: &str, id: u32) -> Result<()> {
        if id < self.last {
            return Err(GstError::OrderingError { id, last: self.last });
        }
        self.last = id;
        self.documents.insert(id, key.to_owned());
        self.aggregation_valid = false;
        self.run_builder(key, id);
        Ok(())
    }

    /// Returns the aggregated document ids under the node reached by `query`,
    /// or the empty set on a miss or an empty query. Requires [`Self::aggregate`]
    /// to have been called since the last insert if `query` matches a node.
    pub fn search(&self, query: &str) -> Result<std::collections::BTreeSet<u32>> {
        self.search_impl(query)
    }

    /// Populates every node's `aggregatedIds` bottom-up from its descendants'
    /// `ownIds`. Must be called after all inserts and before
    /// [`Self::similar`]; any subsequent `insert` invalidates it again.
    pub fn aggregate(&mut self) {
        self.aggregate_impl();
    }

    /// Returns every document id whose indexed string `s` satisfies
    /// `2 * |LCSubstr(query, s)| / (|query| + |s|) > ratio`.
    /// Requires `0 < ratio < 1` and a prior [`Self::aggregate`].
    pub fn similar(&self, query: &str, ratio: f64) -> Result<std::collections::BTreeSet<u32>> {
        self.similar_impl(query, ratio)
    }

    /// Returns the text originally inserted under `id`, if any.
    pub fn document(&self, id: u32) -> Option<&str> {
        self.documents.text(id)
    }

    /// Debug-only: the BFS-from-root node ordering used by aggregation.
    #[cfg(any(test, debug_assertions))]
    pub fn nodes(&self) -> Vec<&Node> {
        self.bfs_order().into_iter().map(|idx| self.node(idx)).collect()
    }

    pub(crate) fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.unwrap()]
    }

    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut Node {
        &mut self.nodes[idx.unwrap()]
    }

    pub(crate) fn edge(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx.unwrap()]
    }

    pub(crate) fn edge_mut(&mut self, idx: EdgeIdx) -> &mut Edge {
        &mut self.edges[idx.unwrap()]
    }

    pub(crate) fn new_node(&mut self, substring_length: usize) -> NodeIdx {
        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new(substring_length));
        idx
    }

    pub(crate) fn new_edge(&mut self, label: Label, source: NodeIdx, dest: NodeIdx) -> EdgeIdx {
        let idx = EdgeIdx::new(self.edges.len());
        self.edges.push(Edge::new(label, source, dest));
        idx
    }

    /// Freezes `text` as a new insertion buffer and returns its index. Called
    /// once per `insert`, before the builder walks `text`; every `Label` the
    /// builder creates during that call addresses this buffer rather than
    /// the (mutable, overwritable) document table.
    pub(crate) fn new_buffer(&mut self, text: &str) -> BufferIdx {
        let idx = BufferIdx::new(self.buffers.len());
        self.buffers.push(text.to_owned());
        idx
    }

    pub(crate) fn buffer_bytes(&self, idx: BufferIdx) -> &[u8] {
        self.buffers[idx.unwrap()].as_bytes()
    }

    pub(crate) fn label_bytes(&self, label: Label) -> &[u8] {
        &self.buffer_bytes(label.buffer())[label.start()..label.end()]
    }

    /// The node reached by following `idx`'s incoming edge back to its
    /// source, or `None` for the root.
    pub(crate) fn source_node(&self, idx: NodeIdx) -> Option<NodeIdx> {
        if idx == NodeIdx::root() {
            None
        } else {
            self.node(idx)
                .source_edge()
                .map(|e| self.edge(e).source())
        }
    }

    pub(crate) fn bfs_order(&self) -> Vec<NodeIdx> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(NodeIdx::root());
        while let Some(n) = queue.pop_front() {
            let children: Vec<EdgeIdx> = self.node(n).edges().collect();
            order.push(n);
            for e in children {
                queue.push_back(self.edge(e).dest());
            }
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn build(docs: &[&str]) -> GeneralizedSuffixTree {
        let mut gst = GeneralizedSuffixTree::new();
        for (id, doc) in docs.iter().enumerate() {
            gst.insert(doc, id as u32).unwrap();
        }
        gst
    }

    /// Checked over a handful of representative trees: each node's outgoing
    /// edges start with distinct bytes, every label is non-empty, and
    /// substringLength tracks parent length + label length.
    #[test]
    fn structural_invariants_hold() {
        for docs in [
            &["cacao"][..],
            &["banana", "ananas", "bandana"][..],
            &["mississippi", "ississippi"][..],
        ] {
            let gst = build(docs);
            for &n in &gst.bfs_order() {
                let mut seen_first_bytes = BTreeSet::new();
                for e in gst.node(n).edges() {
                    let edge = gst.edge(e);
                    let label = edge.label();
                    assert!(label.len() > 0, "edge label must be non-empty");
                    let first = gst.label_bytes(label)[0];
                    assert!(
                        seen_first_bytes.insert(first),
                        "duplicate outgoing first byte {first} at node {n:?}"
                    );

                    let dest = edge.dest();
                    assert_eq!(
                        gst.node(dest).substring_length(),
                        gst.node(n).substring_length() + label.len(),
                        "depth consistency violated at node {dest:?}"
                    );
                }
            }
        }
    }
}
