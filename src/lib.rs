/*!
`widebridge` finds the *wide bridges* of undirected graphs: edges `{g, w}` such that removing both
endpoints `g` and `w` disconnects what remains of the graph (or such that removing `g` alone already
splits the graph and `w` is not a leaf hanging off `g`).

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

All graphs are **undirected**: `Edge(u, v)` is treated as equivalent to `Edge(v, u)`.
Parallel edges and self-loops are stored as given; use [`GraphFromScratch::from_simple_edges`](crate::ops::GraphFromScratch::from_simple_edges)
to canonicalise the input instead.

See the [`repr`] module for the available graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

# Design

All algorithms are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
The commonly used functionalities are also implemented via traits on the graph itself.

The wide bridge detector runs one *ghost pass* per node `g`: a depth-first low-link search over
`G - g` that counts components and collects articulation points. Per-node working state lives in a
reusable [`PassContext`](crate::algo::PassContext) and is reset in `O(1)` between passes.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and all graph representations,
- [`algo`] includes the articulation point finder, the wide bridge detector, BFS and connected components,
- [`gens`] includes a seeded `G(n,p)` generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes the edge list reader and writers.

In most use-cases, `use widebridge::{prelude::*, algo::*};` suffices:

```rust
use widebridge::{prelude::*, algo::*};

let graph = AdjArrayUndir::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)]);
assert_eq!(
    graph.compute_wide_bridges(),
    vec![Edge(0, 2), Edge(1, 2), Edge(2, 3), Edge(3, 4), Edge(3, 5)]
);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `widebridge::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
