//! TOML topology files.
//!
//! A topology file declares the two direction symbols and the six faces in
//! slot order:
//!
//! ```toml
//! [directions]
//! clockwise = "d"
//! counter_clockwise = "i"
//!
//! [[faces]]
//! face = "up"
//! symbol = "U"
//! color = "white"
//! neighbors = [
//!     { face = "front", edge = "top", reversed = false },
//!     # ... three more, in clockwise transfer order
//! ]
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;
use crate::topology::{Face, Neighbor, Topology};

/// Symbols for the two turn directions in move codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionSymbols {
    pub clockwise: char,
    pub counter_clockwise: char,
}

impl Default for DirectionSymbols {
    fn default() -> Self {
        Self {
            clockwise: 'd',
            counter_clockwise: 'i',
        }
    }
}

/// One face entry of a topology file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceSpec {
    pub face: Face,
    pub symbol: char,
    /// Solved color of this face.
    pub color: String,
    /// Neighbor cycle in clockwise transfer order.
    pub neighbors: Vec<Neighbor>,
}

/// Serialized form of a topology, before validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyFile {
    #[serde(default)]
    pub directions: DirectionSymbols,
    pub faces: Vec<FaceSpec>,
}

impl Topology {
    /// Parses and validates a topology from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigurationError> {
        let file: TopologyFile = toml::from_str(text)?;
        Topology::new(file)
    }

    /// Reads, parses and validates a topology file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let topology = Self::from_toml_str(&text)?;
        info!("Loaded topology from {}", path.display());
        Ok(topology)
    }

    /// Serializes this topology in the same format `from_toml_str` reads.
    pub fn to_toml_string(&self) -> Result<String, ConfigurationError> {
        Ok(toml::to_string_pretty(&self.to_file())?)
    }
}
