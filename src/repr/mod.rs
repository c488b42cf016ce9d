/*!
# Graph Representations

The adjacency structure every algorithm in this crate runs on.
A graph is created with a fixed number of nodes and afterwards only grows by edge insertions.

- [`AdjArrayUndir`]: one `Vec<Node>` per node
- [`SparseAdjArrayUndir`]: one `SmallVec<[Node; 8]>` per node, avoiding heap allocations for low-degree nodes
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
