//! Contains functionality to read optimizer configuration from json.
//!
//! All fields are optional, e.g.:
//!
//! ```json
//! {
//!   "maxIterations": 200,
//!   "maxNeighbours": 8,
//!   "openPath": "drop-longest-edge"
//! }
//! ```

#[cfg(test)]
#[path = "../../../tests/unit/extensions/optimize/config_test.rs"]
mod config_test;

use geo_route_core::prelude::{GenericResult, OptimizerConfig};
use std::io::{BufReader, Read};

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<OptimizerConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
