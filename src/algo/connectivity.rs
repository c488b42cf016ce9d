use std::iter::FusedIterator;

use itertools::Itertools;

use super::*;

/// Connected components of an undirected graph, possibly after removing some nodes.
///
/// This is a plain BFS sweep and serves as an independent cross-check of the ghost passes of
/// [`WideBridgeSearch`]: the number of DFS trees a pass starts equals the number of components
/// of `G - ghost`.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns an iterator over the connected components of the graph after removing `ignore`
    fn connected_components_exclude_nodes<I>(&self, ignore: I) -> ConnectedComponents<'_, Self>
    where
        I: IntoIterator<Item = Node>,
    {
        ConnectedComponents::new(self).exclude_nodes(ignore)
    }

    /// Returns the number of connected components (isolated nodes count as components)
    fn number_of_connected_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns the number of connected components after removing `ignore`
    fn number_of_connected_components_exclude_nodes<I>(&self, ignore: I) -> NumNodes
    where
        I: IntoIterator<Item = Node>,
    {
        self.connected_components_exclude_nodes(ignore).count() as NumNodes
    }

    /// Returns *true* if the graph has at most one connected component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() <= 1
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    bfs: BFS<'a, G>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: BFS::new_idle(graph),
        }
    }

    pub fn exclude_nodes<I>(mut self, exclude: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.bfs = self.bfs.with_nodes_excluded(exclude);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs.try_restart_at_unvisited() {
            return None;
        }

        Some(self.bfs.by_ref().collect_vec())
    }
}

impl<G> FusedIterator for ConnectedComponents<'_, G> where G: AdjacencyList {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn components() {
        let graph = AdjArrayUndir::from_edges(7, [(0, 1), (1, 2), (3, 4), (5, 5)]);

        assert_eq!(
            graph.connected_components().collect_vec(),
            vec![vec![0, 1, 2], vec![3, 4], vec![5], vec![6]]
        );
        assert_eq!(graph.number_of_connected_components(), 4);
        assert!(!graph.is_connected());
    }

    #[test]
    fn components_exclude_nodes() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);

        assert_eq!(graph.number_of_connected_components_exclude_nodes([2]), 2);
        assert_eq!(graph.number_of_connected_components_exclude_nodes([1, 3]), 3);
        assert_eq!(graph.number_of_connected_components_exclude_nodes(0..5), 0);
        assert!(graph.is_connected());
    }

    #[test]
    fn empty_graph_is_connected() {
        let graph = AdjArrayUndir::new(0);
        assert_eq!(graph.number_of_connected_components(), 0);
        assert!(graph.is_connected());
    }
}
