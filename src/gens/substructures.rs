/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

These are the building blocks of most hand-crafted instances in the tests.

# Example

```rust
use widebridge::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph) without self-loops.
    /// Edges that already exist are not inserted a second time.
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur);
                prev = cur;
            }

            self.add_edge(prev, first);
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (&u, &v) in nodes.iter().tuple_combinations() {
            if u != v {
                self.try_add_edge(u, v);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([1]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_path([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([]);
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([1]);
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = AdjArrayUndir::new(6);
            g.connect_cycle([0, 3, 1, 4]);
            assert_eq!(
                g.ordered_edges(true).collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        let mut g = AdjArrayUndir::new(6);
        g.connect_clique([1, 2, 4]);
        assert_eq!(g.number_of_edges(), 3);

        g.connect_clique([1, 2, 4, 5]);
        assert_eq!(g.number_of_edges(), 6);
        assert!(!g.has_self_loop(1));
        assert!(g.vertices().all(|u| g.degree_of(u) == if [1, 2, 4, 5].contains(&u) { 3 } else { 0 }));
    }
}
