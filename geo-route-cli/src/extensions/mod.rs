//! Module provides various helper functionality.

pub mod optimize;
