/*!
# Wide Bridges

For every node `g` (the *ghost*) we run a full articulation point pass over `G - g` and derive
the *wide bridges* incident to `g`:

1. If `G - g` consists of more than one component, every edge `{g, w}` whose endpoint `w` has
   degree other than `1` is a wide bridge.
2. Every edge `{g, a}` where `a` is an articulation point of `G - g` is a wide bridge.

Results of all passes are merged into a [`WideBridgeSet`], which keeps the first occurrence of
every (unordered) edge. The output is ordered by ghost and, within a ghost, by rule and
adjacency order.

The total cost is `O(n * (n + m))`; passes are independent, so with the `parallel` feature they
can be spread over a rayon thread pool.
*/

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use fxhash::FxHashSet;
use tracing::{debug, trace, warn};

use super::*;

pub trait WideBridges: IndexedAdjacencyList {
    /// Returns all wide bridges of the graph in detector order
    fn compute_wide_bridges(&self) -> Vec<Edge>;
}

impl<G> WideBridges for G
where
    G: IndexedAdjacencyList,
{
    fn compute_wide_bridges(&self) -> Vec<Edge> {
        WideBridgeSearch::new(self).compute().into_vec()
    }
}

/// Insertion-ordered set of undirected edges.
/// `Edge(u, v)` and `Edge(v, u)` are considered equal; the first inserted orientation is kept.
#[derive(Debug, Clone, Default)]
pub struct WideBridgeSet {
    edges: Vec<Edge>,
    keys: FxHashSet<EdgeKey>,
}

impl WideBridgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `edge` unless it (or its reverse) is present.
    /// Returns *true* if the edge was already present.
    pub fn insert(&mut self, edge: Edge) -> bool {
        let known = !self.keys.insert(edge.key());
        if !known {
            self.edges.push(edge);
        }
        known
    }

    /// Returns *true* if `{u, v}` is in the set
    pub fn contains(&self, u: Node, v: Node) -> bool {
        self.keys.contains(&Edge(u, v).key())
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_vec(self) -> Vec<Edge> {
        self.edges
    }

    /// Returns all edges normalized and sorted, i.e. in a canonical, order-independent form
    pub fn to_sorted_normalized(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges.iter().map(Edge::normalized).collect();
        edges.sort_unstable();
        edges
    }
}

impl PartialEq for WideBridgeSet {
    /// Two sets are equal if they contain the same unordered edges, regardless of order
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Eq for WideBridgeSet {}

impl Extend<Edge> for WideBridgeSet {
    fn extend<T: IntoIterator<Item = Edge>>(&mut self, iter: T) {
        for edge in iter {
            self.insert(edge);
        }
    }
}

impl FromIterator<Edge> for WideBridgeSet {
    fn from_iter<T: IntoIterator<Item = Edge>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for WideBridgeSet {
    type Item = Edge;
    type IntoIter = std::vec::IntoIter<Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

/// Outcome of a single ghost pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhostPass {
    pub ghost: Node,
    /// Number of DFS trees started, i.e. number of connected components of `G - ghost`
    pub components: NumNodes,
    /// Articulation points of `G - ghost` in the order they were found
    pub articulation_points: Vec<Node>,
    /// Wide bridges incident to the ghost; may repeat an edge (parallel edges, both rules)
    pub candidates: Vec<Edge>,
}

/// Working memory for ghost passes, reused from one pass to the next
struct PassWorker<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    search: ArticulationPointSearch<'a, G>,
    articulation_points: ArticulationSet,
}

impl<'a, G> PassWorker<'a, G>
where
    G: IndexedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            search: ArticulationPointSearch::new(graph),
            articulation_points: ArticulationSet::new(graph.number_of_nodes()),
        }
    }

    /// Runs the pass for `ghost`, appends its wide bridges to `candidates` and returns the
    /// number of components of `G - ghost`. The pass is left open in `ctx`.
    fn run(&mut self, ctx: &mut PassContext, ghost: Node, candidates: &mut Vec<Edge>) -> NumNodes {
        let graph = self.graph;

        ctx.begin_pass(Some(ghost));
        self.articulation_points.clear();

        let mut components = 0;
        for u in graph.vertices() {
            if ctx.is_unvisited(u) {
                components += 1;
                self.search.grow_tree(ctx, &mut self.articulation_points, u);
            }
        }

        if components > 1 {
            candidates.extend(
                graph
                    .neighbors_of(ghost)
                    .filter(|&w| w != ghost && graph.degree_of(w) != 1)
                    .map(|w| Edge(ghost, w)),
            );
        }

        let articulation_points = &self.articulation_points;
        candidates.extend(
            graph
                .neighbors_of(ghost)
                .filter(|&w| articulation_points.contains(w))
                .map(|w| Edge(ghost, w)),
        );

        components
    }
}

/// Configurable wide bridge search.
///
/// ```
/// use widebridge::{prelude::*, algo::*};
///
/// let graph = AdjArrayUndir::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let bridges = WideBridgeSearch::new(&graph).compute();
/// assert_eq!(bridges.as_slice(), &[Edge(1, 2)]);
/// ```
pub struct WideBridgeSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    graph: &'a G,
    abort: Option<Arc<AtomicBool>>,
}

impl<'a, G> WideBridgeSearch<'a, G>
where
    G: IndexedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph, abort: None }
    }

    /// The flag is checked before every ghost pass; once it is raised, no further pass starts.
    pub fn set_abort_flag(&mut self, flag: Arc<AtomicBool>) {
        self.abort = Some(flag);
    }

    /// The flag is checked before every ghost pass; once it is raised, no further pass starts.
    pub fn abort_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.set_abort_flag(flag);
        self
    }

    fn is_aborted(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Runs a single ghost pass in isolation
    /// ** Panics if `ghost >= n` **
    pub fn ghost_pass(&self, ghost: Node) -> GhostPass {
        assert!(ghost < self.graph.number_of_nodes());

        let mut ctx = PassContext::new(self.graph.number_of_nodes());
        let mut worker = PassWorker::new(self.graph);
        let mut candidates = Vec::new();
        let components = worker.run(&mut ctx, ghost, &mut candidates);

        GhostPass {
            ghost,
            components,
            articulation_points: worker.articulation_points.as_slice().to_vec(),
            candidates,
        }
    }

    /// Computes all wide bridges.
    /// If the abort flag is raised, the wide bridges of all passes completed so far are returned.
    pub fn compute(self) -> WideBridgeSet {
        let mut ctx = PassContext::new(self.graph.number_of_nodes());
        match self.compute_in(&mut ctx) {
            Ok(bridges) | Err((bridges, _)) => bridges,
        }
    }

    /// Computes all wide bridges or returns [`GraphError::Aborted`] if the abort flag was raised
    pub fn try_compute(self) -> Result<WideBridgeSet, GraphError> {
        let mut ctx = PassContext::new(self.graph.number_of_nodes());
        self.try_compute_in(&mut ctx)
    }

    /// Like [`WideBridgeSearch::try_compute`] but runs in a caller-provided context, which is
    /// reset when the search returns: no node remains visited or ghost.
    /// ** Panics if `ctx` was created for a different number of nodes **
    pub fn try_compute_in(&self, ctx: &mut PassContext) -> Result<WideBridgeSet, GraphError> {
        self.compute_in(ctx).map_err(|(_, completed_passes)| {
            warn!(completed_passes, "wide bridge search aborted");
            GraphError::Aborted { completed_passes }
        })
    }

    fn compute_in(
        &self,
        ctx: &mut PassContext,
    ) -> Result<WideBridgeSet, (WideBridgeSet, NumNodes)> {
        assert_eq!(ctx.number_of_nodes(), self.graph.number_of_nodes());
        debug!(nodes = self.graph.number_of_nodes(), "searching wide bridges");

        let mut worker = PassWorker::new(self.graph);
        let mut bridges = WideBridgeSet::new();
        let mut candidates = Vec::new();

        for ghost in self.graph.vertices() {
            if self.is_aborted() {
                ctx.reset();
                return Err((bridges, ghost));
            }

            candidates.clear();
            let components = worker.run(ctx, ghost, &mut candidates);

            trace!(
                ghost,
                components,
                articulation_points = worker.articulation_points.len(),
                candidates = candidates.len(),
                "ghost pass finished"
            );

            bridges.extend(candidates.iter().copied());
        }

        ctx.reset();
        debug!(wide_bridges = bridges.len(), "wide bridge search finished");

        Ok(bridges)
    }
}

#[cfg(feature = "parallel")]
impl<G> WideBridgeSearch<'_, G>
where
    G: IndexedAdjacencyList + Sync,
{
    /// Like [`WideBridgeSearch::try_compute`] but runs ghost passes on the rayon thread pool.
    /// The result is identical to the sequential search, including its order.
    pub fn try_compute_parallel(self) -> Result<WideBridgeSet, GraphError> {
        use rayon::prelude::*;

        let n = self.graph.number_of_nodes();
        debug!(nodes = n, "searching wide bridges in parallel");

        let passes: Vec<Option<Vec<Edge>>> = (0..n)
            .into_par_iter()
            .map_init(
                || (PassContext::new(n), PassWorker::new(self.graph)),
                |(ctx, worker), ghost| {
                    if self.is_aborted() {
                        return None;
                    }

                    let mut candidates = Vec::new();
                    worker.run(ctx, ghost, &mut candidates);
                    Some(candidates)
                },
            )
            .collect();

        let completed_passes = passes.iter().filter(|pass| pass.is_some()).count() as NumNodes;
        if completed_passes < n {
            warn!(completed_passes, "wide bridge search aborted");
            return Err(GraphError::Aborted { completed_passes });
        }

        let bridges: WideBridgeSet = passes.into_iter().flatten().flatten().collect();
        debug!(wide_bridges = bridges.len(), "wide bridge search finished");

        Ok(bridges)
    }

    /// Like [`WideBridgeSearch::compute`] but runs ghost passes on the rayon thread pool.
    /// If the abort flag is raised, the wide bridges of all passes completed so far are returned.
    pub fn compute_parallel(self) -> WideBridgeSet {
        use rayon::prelude::*;

        let n = self.graph.number_of_nodes();
        let passes: Vec<Vec<Edge>> = (0..n)
            .into_par_iter()
            .map_init(
                || (PassContext::new(n), PassWorker::new(self.graph)),
                |(ctx, worker), ghost| {
                    let mut candidates = Vec::new();
                    if !self.is_aborted() {
                        worker.run(ctx, ghost, &mut candidates);
                    }
                    candidates
                },
            )
            .collect();

        passes.into_iter().flatten().collect()
    }
}
