use crate::aa::{Extension, Semantics};
use std::collections::HashMap;

/// The graph of all the states reachable by the serialisation process.
///
/// Each node is a reachable state, identified by its constructed extension
/// (the residual framework is fully determined by it).
/// An edge links a state to its successor and carries the initial set chosen
/// by the transition.
/// The nodes at which the termination rule of the semantics holds are marked
/// as accepted; their extensions are exactly the extensions of the framework
/// under the serialisable rendering of the semantics.
pub struct SerialisationGraph {
    semantics: Semantics,
    nodes: Vec<Extension>,
    accepted: Vec<bool>,
    edges: Vec<(usize, usize, Extension)>,
    index_of: HashMap<Extension, usize>,
}

impl SerialisationGraph {
    pub(crate) fn new(semantics: Semantics, n_arguments: usize) -> Self {
        let root = Extension::new(n_arguments);
        let mut index_of = HashMap::new();
        index_of.insert(root.clone(), 0);
        SerialisationGraph {
            semantics,
            nodes: vec![root],
            accepted: vec![false],
            edges: Vec::new(),
            index_of,
        }
    }

    /// Returns the index of the node with the given constructed extension,
    /// creating it if it is seen for the first time.
    pub(crate) fn node_index_or_insert(&mut self, constructed: &Extension) -> usize {
        if let Some(index) = self.index_of.get(constructed) {
            return *index;
        }
        let index = self.nodes.len();
        self.nodes.push(constructed.clone());
        self.accepted.push(false);
        self.index_of.insert(constructed.clone(), index);
        index
    }

    pub(crate) fn add_edge(&mut self, from: usize, to: usize, chosen: Extension) {
        self.edges.push((from, to, chosen));
    }

    pub(crate) fn mark_accepted(&mut self, node: usize) {
        self.accepted[node] = true;
    }

    /// Returns the semantics the graph was built for.
    pub fn semantics(&self) -> Semantics {
        self.semantics
    }

    /// Returns the index of the root node (the empty extension).
    pub fn root(&self) -> usize {
        0
    }

    /// Returns the number of nodes of the graph.
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the constructed extension of a node.
    pub fn node(&self, index: usize) -> &Extension {
        &self.nodes[index]
    }

    /// Returns `true` iff the node is accepted by the termination rule.
    pub fn is_accepted(&self, index: usize) -> bool {
        self.accepted[index]
    }

    /// Iterates over the edges of the graph, as
    /// `(source node, target node, chosen set)` triples.
    pub fn iter_edges(&self) -> impl Iterator<Item = &(usize, usize, Extension)> + '_ {
        self.edges.iter()
    }

    /// Returns the extensions of the accepted nodes, without duplicates, in
    /// node creation order.
    pub fn extensions(&self) -> Vec<Extension> {
        self.nodes
            .iter()
            .zip(self.accepted.iter())
            .filter_map(|(ext, accepted)| if *accepted { Some(ext.clone()) } else { None })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_are_deduplicated() {
        let mut graph = SerialisationGraph::new(Semantics::CO, 3);
        let n1 = graph.node_index_or_insert(&Extension::from_ids(3, &[0]));
        let n2 = graph.node_index_or_insert(&Extension::from_ids(3, &[0]));
        assert_eq!(n1, n2);
        assert_eq!(2, graph.n_nodes());
    }

    #[test]
    fn test_extensions_are_the_accepted_nodes() {
        let mut graph = SerialisationGraph::new(Semantics::CO, 3);
        let n1 = graph.node_index_or_insert(&Extension::from_ids(3, &[0]));
        let n2 = graph.node_index_or_insert(&Extension::from_ids(3, &[0, 2]));
        graph.add_edge(graph.root(), n1, Extension::from_ids(3, &[0]));
        graph.add_edge(n1, n2, Extension::from_ids(3, &[2]));
        graph.mark_accepted(n2);
        assert_eq!(vec![Extension::from_ids(3, &[0, 2])], graph.extensions());
        assert!(!graph.is_accepted(graph.root()));
        assert_eq!(2, graph.iter_edges().count());
    }
}
