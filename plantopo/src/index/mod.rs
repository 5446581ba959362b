//! Spatial indexes: a packed R-tree, monotone chains, and an interval sweep.

mod chain;
mod strtree;
mod sweepline;

pub use chain::{chains, MonotoneChain};
pub use strtree::StrTree;
pub use sweepline::SweepLineIndex;
