/// Every graph representation should pass the same conformance tests against a bitset
/// adjacency matrix
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, testing::test_graph_ops, *};
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of at most `m_ub` random normalized edges for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                let mut edges: Vec<Edge> = (0..m_ub).map(|_| {
                    let u = rng.random_range(0..n);
                    let v = rng.random_range(0..n);
                    Edge(u, v).normalized()
                }).collect_vec();
                edges.sort_unstable();
                edges.dedup();

                edges
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..50 {
                let graph = <$graph>::new(n);

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);

                assert_eq!(graph.vertices_range().len(), n as usize);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                assert!(graph.vertices().all(|u| graph.is_isolated(u)));
            }
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);

                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        for &Edge(u, v) in &edges {
                            adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);
                        }

                        let graph = <$graph>::from_edges(n, edges.iter());
                        let m = edges.len() as NumEdges;

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges(), m);
                        assert_eq!(edges, graph.ordered_edges(true).collect_vec());

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                            assert_eq!(graph.degree_of(u), adj_matrix[u as usize].cardinality());
                            assert_eq!(
                                graph.as_neighbors_slice(u).iter().copied().collect_vec(),
                                graph.neighbors_of(u).collect_vec()
                            );
                            for i in 0..graph.degree_of(u) {
                                assert!(adj_matrix[u as usize].get_bit(graph.ith_neighbor(u, i)));
                            }
                        }
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let mut graph = <$graph>::new(n);
                        let mut adj_matrix: Vec<NodeBitSet> = vec![NodeBitSet::new(n); n as usize];
                        let mut m = 0;

                        for _ in 0..m_ub {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let existed = adj_matrix[u as usize].set_bit(v);
                            adj_matrix[v as usize].set_bit(u);

                            assert_eq!(graph.try_add_edge(u, v), existed);
                            if !existed {
                                m += 1;
                            }
                            assert_eq!(m, graph.number_of_edges());
                        }

                        for u in 0..n {
                            assert_eq!(graph.neighbors_of_as_bitset(u), adj_matrix[u as usize]);
                        }

                        // plain insertions never deduplicate
                        let non_loop = graph.edges(true).find(|e| !e.is_loop());
                        if let Some(Edge(u, v)) = non_loop {
                            let degree = graph.degree_of(u);
                            graph.add_edge(u, v);
                            assert_eq!(graph.degree_of(u), degree + 1);
                            assert_eq!(graph.number_of_edges(), m + 1);
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
