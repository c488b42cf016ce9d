use crate::repr::macros::impl_common_graph_ops;

use super::*;

/// An undirected graph representation.
///
/// Every edge `{u, v}` is stored symmetrically: `v` in the neighborhood of `u` and `u` in the
/// neighborhood of `v`. A self-loop `{u, u}` occupies a single entry, so it adds `1` (not `2`)
/// to the degree of `u`. Loops never separate anything, so this does not change articulation
/// points or wide bridges; it only affects `degree_of` and the leaf test on loop nodes.
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl_common_graph_ops!(UndirectedGraph<nbs : Nbs>);

impl<Nbs: Neighborhood> std::fmt::Debug for UndirectedGraph<Nbs> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndirectedGraph")
            .field("number_of_nodes", &self.number_of_nodes())
            .field("edges", &self.edges(true).collect::<Vec<_>>())
            .finish()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn add_edge(&mut self, u: Node, v: Node) {
        assert!(
            (v as usize) < self.nbs.len(),
            "node {v} is out of range for a graph with {} nodes",
            self.nbs.len()
        );
        self.nbs[u as usize].add_neighbor(v);
        if u != v {
            self.nbs[v as usize].add_neighbor(u);
        }
        self.num_edges += 1;
    }

    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if self.has_edge(u, v) {
            true
        } else {
            self.add_edge(u, v);
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn edges_are_stored_symmetrically() {
        let mut graph = AdjArrayUndir::new(4);
        graph.add_edges([(0, 1), (2, 1), (3, 3)]);

        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 2]);
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1]);
        assert_eq!(graph.neighbors_of(3).collect_vec(), vec![3]);
        assert!(graph.has_self_loop(3));

        for Edge(u, v) in graph.edges(false) {
            assert!(graph.has_edge(v, u));
        }
    }

    #[test]
    fn self_loop_counts_once_towards_degree() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(1, 1);
        assert_eq!(graph.degree_of(1), 1);
        assert_eq!(graph.as_neighbors_slice(1), &[1]);

        graph.add_edge(1, 1);
        graph.add_edge(1, 2);
        assert_eq!(graph.degree_of(1), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.edges(true).collect_vec(), vec![Edge(1, 1), Edge(1, 1), Edge(1, 2)]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = AdjArrayUndir::new(3);
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 2);
        assert_eq!(graph.as_neighbors_slice(1), &[0, 0]);

        assert!(graph.try_add_edge(0, 1));
        assert!(!graph.try_add_edge(1, 2));
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn empty_graph() {
        let graph = SparseAdjArrayUndir::new(0);
        assert!(graph.is_empty());
        assert!(graph.is_singleton_graph());
        assert_eq!(graph.vertices().count(), 0);
        assert_eq!(graph.max_degree(), 0);
    }

    #[test]
    fn try_from_edges_rejects_out_of_range() {
        let err = AdjArrayUndir::try_from_edges(3, [(0, 1), (1, 3)]).err();
        assert!(matches!(
            err,
            Some(GraphError::InvalidVertexIndex {
                node: 3,
                number_of_nodes: 3
            })
        ));

        let graph = AdjArrayUndir::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn simple_construction_drops_duplicates_and_loops() {
        let graph = AdjArrayUndir::from_simple_edges(3, [(0, 1), (1, 0), (2, 2), (1, 2)]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(1), 2);
        assert!(!graph.has_self_loop(2));

        assert!(AdjArrayUndir::try_from_simple_edges(2, [(0, 5)]).is_err());
    }

    #[test]
    #[should_panic]
    fn add_edge_out_of_range_panics() {
        let mut graph = AdjArrayUndir::new(2);
        graph.add_edge(0, 2);
    }
}

crate::testing::test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
crate::testing::test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
