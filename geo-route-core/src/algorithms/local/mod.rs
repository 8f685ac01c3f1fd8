//! Local search operators which polish a tour found by other heuristics.

mod two_opt;
pub use self::two_opt::optimize_two_opt;
