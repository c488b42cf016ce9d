use super::*;

/// Computes articulation points (cut vertices) of an undirected graph, optionally with a ghost
/// node treated as removed.
pub trait ArticulationPoints: IndexedAdjacencyList {
    /// Returns the articulation points of the graph
    fn compute_articulation_points(&self) -> NodeBitSet;

    /// Returns the articulation points of the graph after removing `ghost`
    /// ** Panics if `ghost >= n` **
    fn compute_articulation_points_without(&self, ghost: Node) -> NodeBitSet;
}

impl<G> ArticulationPoints for G
where
    G: IndexedAdjacencyList,
{
    fn compute_articulation_points(&self) -> NodeBitSet {
        articulation_points_of_pass(self, None)
    }

    fn compute_articulation_points_without(&self, ghost: Node) -> NodeBitSet {
        assert!(ghost < self.number_of_nodes());
        articulation_points_of_pass(self, Some(ghost))
    }
}

fn articulation_points_of_pass<G: IndexedAdjacencyList>(graph: &G, ghost: Option<Node>) -> NodeBitSet {
    let mut ctx = PassContext::new(graph.number_of_nodes());
    let mut aps = ArticulationSet::new(graph.number_of_nodes());
    ctx.begin_pass(ghost);

    let mut search = ArticulationPointSearch::new(graph);
    for u in graph.vertices() {
        if ctx.is_unvisited(u) {
            search.grow_tree(&mut ctx, &mut aps, u);
        }
    }

    aps.into_bitset()
}

/// Articulation points found during one pass: kept in discovery order with O(1) membership
/// tests. Clearing costs `O(|points|)` rather than `O(n)`.
#[derive(Debug, Clone)]
pub struct ArticulationSet {
    points: Vec<Node>,
    members: NodeBitSet,
}

impl ArticulationSet {
    pub fn new(n: NumNodes) -> Self {
        Self {
            points: Vec::new(),
            members: NodeBitSet::new(n),
        }
    }

    /// Records `u`; returns *true* if it was recorded before
    pub fn insert(&mut self, u: Node) -> bool {
        let known = self.members.set_bit(u);
        if !known {
            self.points.push(u);
        }
        known
    }

    pub fn contains(&self, u: Node) -> bool {
        self.members.get_bit(u)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Articulation points in the order they were found
    pub fn as_slice(&self) -> &[Node] {
        &self.points
    }

    pub fn clear(&mut self) {
        for &u in &self.points {
            self.members.clear_bit(u);
        }
        self.points.clear();
    }

    pub fn into_bitset(self) -> NodeBitSet {
        self.members
    }
}

/// Stack frame of the iterative low-link search
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: Node,
    parent: Node,
    next_neighbor: NumNodes,
    is_articulation_point: bool,
}

/// Depth-first low-link search for articulation points.
///
/// The search runs on an explicit stack, so arbitrarily long paths do not exhaust the call
/// stack. All per-node state lives in a [`PassContext`] supplied by the caller; the ghost of that
/// pass is invisible to the search.
pub struct ArticulationPointSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    stack: Vec<Frame>,
}

impl<'a, G> ArticulationPointSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            stack: Vec::new(),
        }
    }

    /// Visits `root` as the root of a new DFS tree and searches every subtree hanging off it.
    /// Records all articulation points of the tree (including `root` if it has more than one
    /// child) and returns the number of children of `root`.
    ///
    /// ** Panics (in debug) if `root` is not unvisited **
    pub fn grow_tree(
        &mut self,
        ctx: &mut PassContext,
        articulation_points: &mut ArticulationSet,
        root: Node,
    ) -> NumNodes {
        ctx.visit(root);

        let mut children = 0;
        for i in 0..self.graph.degree_of(root) {
            let v = self.graph.ith_neighbor(root, i);
            if ctx.is_unvisited(v) {
                children += 1;
                self.search(ctx, articulation_points, v, root);
            }
        }

        // a root separates its subtrees from one another
        if children > 1 {
            articulation_points.insert(root);
        }

        children
    }

    /// Searches the subtree of the unvisited node `start` whose tree edge leads to the already
    /// visited `parent` and returns the resulting low-link value of `start`.
    ///
    /// Every node `u` of the subtree with a child `v` satisfying `low(v) >= discovery(u)` is
    /// recorded as articulation point. `start` itself is treated like any inner node: if it is
    /// the root of its tree, its classification is up to the caller (see [`Self::grow_tree`]).
    pub fn search(
        &mut self,
        ctx: &mut PassContext,
        articulation_points: &mut ArticulationSet,
        start: Node,
        parent: Node,
    ) -> Discovery {
        debug_assert!(self.stack.is_empty());

        ctx.visit(start);
        self.stack.push(Frame {
            node: start,
            parent,
            next_neighbor: 0,
            is_articulation_point: false,
        });

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.node;

            if frame.next_neighbor < self.graph.degree_of(u) {
                let v = self.graph.ith_neighbor(u, frame.next_neighbor);
                frame.next_neighbor += 1;

                // all copies of the tree edge to the parent are skipped
                if v == frame.parent || ctx.is_ghost(v) {
                    continue;
                }

                if ctx.is_visited(v) {
                    // back edge (or the reverse direction of one)
                    ctx.update_low(u, ctx.discovery(v));
                } else {
                    ctx.visit(v);
                    self.stack.push(Frame {
                        node: v,
                        parent: u,
                        next_neighbor: 0,
                        is_articulation_point: false,
                    });
                }
                continue;
            }

            // all neighbors of `u` are done: propagate its low-link to the parent frame
            self.stack.pop();
            let low = ctx.low(u);

            match self.stack.last_mut() {
                Some(parent_frame) => {
                    let p = parent_frame.node;
                    ctx.update_low(p, low);

                    if !parent_frame.is_articulation_point && low >= ctx.discovery(p) {
                        parent_frame.is_articulation_point = true;
                        articulation_points.insert(p);
                    }
                }
                None => return low,
            }
        }

        ctx.low(start)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;
    use itertools::Itertools;

    fn sorted(aps: NodeBitSet) -> Vec<Node> {
        aps.iter_set_bits().collect_vec()
    }

    #[test]
    fn articulation_points_in_path() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_path(0..5);

        assert_eq!(sorted(graph.compute_articulation_points()), vec![1, 2, 3]);
        assert!(graph.compute_articulation_points_without(2).are_all_unset());
        assert_eq!(sorted(graph.compute_articulation_points_without(0)), vec![2, 3]);
    }

    #[test]
    fn articulation_points_of_two_triangles() {
        let mut graph = AdjArrayUndir::new(6);
        graph.connect_cycle([0, 1, 2]);
        graph.connect_cycle([3, 4, 5]);
        graph.add_edge(2, 3);

        assert_eq!(sorted(graph.compute_articulation_points()), vec![2, 3]);
        assert_eq!(sorted(graph.compute_articulation_points_without(4)), vec![2, 3]);
        assert!(graph.compute_articulation_points_without(3).are_all_unset());
    }

    #[test]
    fn root_with_several_children() {
        // star with center 0 is explored from the center
        let graph = AdjArrayUndir::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(sorted(graph.compute_articulation_points()), vec![0]);

        // explored from a leaf, the center is an inner node
        let graph = AdjArrayUndir::from_edges(4, [(0, 3), (1, 3), (2, 3)]);
        assert_eq!(sorted(graph.compute_articulation_points()), vec![3]);
    }

    #[test]
    fn no_articulation_points_in_cliques_and_cycles() {
        for n in 3..8 {
            let mut graph = AdjArrayUndir::new(n);
            graph.connect_clique(0..n);
            assert!(graph.compute_articulation_points().are_all_unset());

            let mut graph = AdjArrayUndir::new(n);
            graph.connect_cycle(0..n);
            assert!(graph.compute_articulation_points().are_all_unset());
        }
    }

    #[test]
    fn parallel_edges_and_loops_do_not_hide_cut_vertices() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 0), (1, 2), (2, 1), (1, 1)]);
        assert_eq!(sorted(graph.compute_articulation_points()), vec![1]);
    }

    #[test]
    fn search_reports_low_link_of_subtree() {
        let mut graph = AdjArrayUndir::new(4);
        graph.connect_cycle([0, 1, 2, 3]);

        let mut ctx = PassContext::new(4);
        let mut aps = ArticulationSet::new(4);
        ctx.begin_pass(None);
        ctx.visit(0);

        let mut search = ArticulationPointSearch::new(&graph);
        // the cycle leads back to the root, whose discovery order is 0
        assert_eq!(search.search(&mut ctx, &mut aps, 1, 0), 0);
        assert!(aps.is_empty());
        assert!((0..4).all(|u| ctx.is_visited(u)));
    }

    #[test]
    fn ghost_is_invisible() {
        let mut graph = AdjArrayUndir::new(4);
        graph.connect_cycle([0, 1, 2, 3]);

        let mut ctx = PassContext::new(4);
        let mut aps = ArticulationSet::new(4);
        ctx.begin_pass(Some(3));

        let mut search = ArticulationPointSearch::new(&graph);
        assert_eq!(search.grow_tree(&mut ctx, &mut aps, 0), 1);
        assert_eq!(aps.as_slice(), &[1]);
        assert!(!ctx.is_visited(3));
    }

    #[test]
    fn articulation_set_clear() {
        let mut aps = ArticulationSet::new(10);
        assert!(!aps.insert(4));
        assert!(!aps.insert(2));
        assert!(aps.insert(4));
        assert_eq!(aps.as_slice(), &[4, 2]);
        assert!(aps.contains(2));

        aps.clear();
        assert!(aps.is_empty());
        assert!(!aps.contains(4));
        assert!(aps.into_bitset().are_all_unset());
    }

    #[test]
    fn long_path_does_not_overflow() {
        let n = 300_000;
        let mut graph = AdjArrayUndir::new(n);
        graph.connect_path(0..n);

        assert_eq!(graph.compute_articulation_points().cardinality(), n - 2);
    }
}
