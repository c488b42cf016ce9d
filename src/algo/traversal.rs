/*!
Breadth-first traversal.

[`BFS`] is an iterator over all nodes reachable from a start node. Nodes can be excluded up
front, which makes them invisible to the search; this is how components of `G - X` are
enumerated without copying the graph.
*/

use std::collections::VecDeque;

use super::*;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub struct BFS<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Creates a traversal iterator that has no start node yet.
    /// Use [`BFS::try_restart_at_unvisited`] to begin.
    pub fn new_idle(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            queue: VecDeque::new(),
        }
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        let next = self.visited.iter_cleared_bits().next();
        match next {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(u);
                true
            }
        }
    }

    /// Excludes a node from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that node will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the node is already in the queue. It is therefore
    /// highly recommended to call this method directly after the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Exclude multiple nodes from traversal
    pub fn with_nodes_excluded<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            self.exclude_node(u);
        }
        self
    }

    /// Returns *true* if `u` was visited (or excluded)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }
}

pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn bfs_order() {
        let graph = AdjArrayUndir::from_edges(6, [(0, 1), (0, 2), (1, 3), (2, 3), (4, 5)]);
        assert_eq!(graph.bfs(0).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(graph.bfs(5).collect_vec(), vec![5, 4]);
    }

    #[test]
    fn bfs_with_exclusions_and_restarts() {
        let graph = AdjArrayUndir::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let mut bfs = BFS::new_idle(&graph).with_nodes_excluded([2]);

        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![0, 1]);
        assert!(bfs.try_restart_at_unvisited());
        assert_eq!(bfs.by_ref().collect_vec(), vec![3, 4]);
        assert!(!bfs.try_restart_at_unvisited());
        assert!(bfs.did_visit_node(2));
    }
}
