/*!
# Ghost Passes

A *pass* is one sweep of depth-first searches over the graph while (at most) one node, the
*ghost*, is treated as absent. [`PassContext`] owns all per-node working state of a pass:
whether a node was visited, its discovery order and its low-link value.

Instead of clearing `O(n)` state between passes, every node carries the generation of the pass
it was last visited in. Starting a new pass only increments the generation, which implicitly
resets every node to [`VertexState::Unvisited`].
*/

use super::*;

/// State of a node within the current pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexState {
    Unvisited,
    Visited,
    /// Treated as removed from the graph for the duration of the pass
    Ghost,
}

/// Discovery order of a node within a pass
pub type Discovery = Node;

/// Per-pass working state of the articulation point finder
#[derive(Debug, Clone)]
pub struct PassContext {
    generation: u32,
    last_visited: Vec<u32>,
    discovery: Vec<Discovery>,
    low: Vec<Discovery>,
    ghost: Option<Node>,
    time: Discovery,
}

impl PassContext {
    /// Creates a context for a graph with `n` nodes; all nodes start unvisited
    pub fn new(n: NumNodes) -> Self {
        Self {
            generation: 1,
            last_visited: vec![0; n as usize],
            discovery: vec![0; n as usize],
            low: vec![0; n as usize],
            ghost: None,
            time: 0,
        }
    }

    /// Returns the number of nodes the context was created for
    pub fn number_of_nodes(&self) -> NumNodes {
        self.last_visited.len() as NumNodes
    }

    /// Ends the current pass and starts a new one with the given ghost.
    /// All nodes (including a previous ghost) become unvisited.
    pub fn begin_pass(&mut self, ghost: Option<Node>) {
        debug_assert!(ghost.is_none_or(|g| g < self.number_of_nodes()));
        self.reset();
        self.ghost = ghost;
    }

    /// Ends the current pass without starting a new one
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // stale stamps could alias the restarted counter
            self.last_visited.fill(0);
            self.generation = 1;
        }
        self.ghost = None;
        self.time = 0;
    }

    /// The ghost of the current pass
    pub fn ghost(&self) -> Option<Node> {
        self.ghost
    }

    /// Returns the state of `u` in the current pass
    pub fn state(&self, u: Node) -> VertexState {
        if self.ghost == Some(u) {
            VertexState::Ghost
        } else if self.last_visited[u as usize] == self.generation {
            VertexState::Visited
        } else {
            VertexState::Unvisited
        }
    }

    #[inline]
    pub fn is_ghost(&self, u: Node) -> bool {
        self.ghost == Some(u)
    }

    #[inline]
    pub fn is_visited(&self, u: Node) -> bool {
        self.last_visited[u as usize] == self.generation
    }

    /// Neither visited nor the ghost
    #[inline]
    pub fn is_unvisited(&self, u: Node) -> bool {
        !self.is_visited(u) && !self.is_ghost(u)
    }

    /// Marks `u` as visited and assigns the next discovery order to it, which also becomes
    /// its initial low-link value.
    pub fn visit(&mut self, u: Node) -> Discovery {
        debug_assert!(self.is_unvisited(u));

        let time = self.time;
        self.time += 1;

        self.last_visited[u as usize] = self.generation;
        self.discovery[u as usize] = time;
        self.low[u as usize] = time;
        time
    }

    /// Discovery order of `u`; only meaningful if `u` was visited in this pass
    #[inline]
    pub fn discovery(&self, u: Node) -> Discovery {
        debug_assert!(self.is_visited(u));
        self.discovery[u as usize]
    }

    /// Low-link value of `u`; only meaningful if `u` was visited in this pass
    #[inline]
    pub fn low(&self, u: Node) -> Discovery {
        debug_assert!(self.is_visited(u));
        self.low[u as usize]
    }

    /// Lowers the low-link value of `u` to `value` if smaller
    #[inline]
    pub fn update_low(&mut self, u: Node, value: Discovery) {
        let low = &mut self.low[u as usize];
        *low = (*low).min(value);
    }

    /// Number of nodes visited in the current pass
    pub fn number_of_visited(&self) -> NumNodes {
        self.time
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn states_follow_passes() {
        let mut ctx = PassContext::new(4);
        assert!((0..4).all(|u| ctx.state(u) == VertexState::Unvisited));

        ctx.begin_pass(Some(2));
        assert_eq!(ctx.state(2), VertexState::Ghost);
        assert!(!ctx.is_unvisited(2));

        assert_eq!(ctx.visit(0), 0);
        assert_eq!(ctx.visit(3), 1);
        assert_eq!(ctx.state(0), VertexState::Visited);
        assert_eq!(ctx.state(1), VertexState::Unvisited);
        assert_eq!(ctx.number_of_visited(), 2);

        ctx.update_low(3, 0);
        ctx.update_low(3, 1);
        assert_eq!(ctx.low(3), 0);
        assert_eq!(ctx.discovery(3), 1);

        ctx.begin_pass(Some(0));
        assert_eq!(ctx.state(0), VertexState::Ghost);
        assert_eq!(ctx.state(2), VertexState::Unvisited);
        assert_eq!(ctx.state(3), VertexState::Unvisited);
        assert_eq!(ctx.visit(3), 0);

        ctx.reset();
        assert!((0..4).all(|u| ctx.state(u) == VertexState::Unvisited));
        assert_eq!(ctx.ghost(), None);
    }

    #[test]
    fn generation_wrap_around() {
        let mut ctx = PassContext::new(3);
        ctx.generation = u32::MAX - 1;
        ctx.begin_pass(None);
        ctx.visit(1);
        assert!(ctx.is_visited(1));

        ctx.begin_pass(None);
        assert_eq!(ctx.generation, 1);
        assert!((0..3).all(|u| ctx.is_unvisited(u)));
    }
}
