//! Bottom-up propagation of document-id sets from leaves to ancestors.

use std::collections::BTreeSet;

use crate::edge::EdgeIdx;
use crate::tree::GeneralizedSuffixTree;

impl GeneralizedSuffixTree {
    pub(crate) fn aggregate_impl(&mut self) {
        // BFS order guarantees every child precedes its parent once reversed.
        let order = self.bfs_order();
        for &n in order.iter().rev() {
            let mut ids: BTreeSet<u32> = self.node(n).own_ids().iter().copied().collect();
            let children: Vec<EdgeIdx> = self.node(n).edges().collect();
            for e in children {
                let child = self.edge(e).dest();
                if let Some(child_ids) = self.node(child).aggregated_ids() {
                    ids.extend(child_ids.iter().copied());
                }
            }
            self.node_mut(n).set_aggregated_ids(ids.into_iter().collect());
        }
        self.aggregation_valid = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::tree::GeneralizedSuffixTree;

    #[test]
    fn aggregation_unions_own_ids_up_the_tree() {
        let mut gst = GeneralizedSuffixTree::new();
        gst.insert("banana", 0).unwrap();
        gst.insert("ananas", 1).unwrap();
        gst.insert("bandana", 2).unwrap();
        gst.aggregate();

        let root = gst.nodes()[0];
        let mut root_ids: Vec<u32> = root.aggregated_ids().unwrap().to_vec();
        root_ids.sort_unstable();
        assert_eq!(root_ids, vec![0, 1, 2]);
    }
}
