/*!
# Graph Algorithms

The biconnectivity machinery of this crate, built on top of the graph representations in
[`repr`](crate::repr). All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use widebridge::algo::*;
```
and gain access to articulation points, wide bridges, traversal and connectivity.

Algorithms are provided as configurable structs (e.g. [`WideBridgeSearch`]) and, for the common
case, as traits implemented on the graph itself (e.g. [`WideBridges::compute_wide_bridges`]).
*/

mod articulation;
mod connectivity;
mod pass;
mod traversal;
mod wide_bridges;

use crate::prelude::*;

pub use articulation::*;
pub use connectivity::*;
pub use pass::*;
pub use traversal::*;
pub use wide_bridges::*;
