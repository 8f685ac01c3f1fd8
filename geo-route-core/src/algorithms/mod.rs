//! A collection of reusable algorithms without dependencies on any other module in the project.

mod adjacency;
pub use self::adjacency::*;

pub mod geodesy;
pub mod lkh;
pub mod local;
pub mod mst;
