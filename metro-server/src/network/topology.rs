//! Station topology as stored on disk.
//!
//! The station file is a JSON object keyed by station name. Each station
//! lists its outgoing links and the lines that serve it:
//!
//! ```json
//! {
//!   "Xizhimen": {
//!     "edge": [
//!       { "station": "Chegongzhuang", "line": "Line 2", "distance": 909, "speed": 12.6, "time": 72 }
//!     ],
//!     "lines": ["Line 2", "Line 4", "Line 13"],
//!     "line_siz": 3
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{GraphError, LineId};

/// Errors that can occur while loading a topology.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The station file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The station file is not valid JSON for a topology
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A link points at a station that is not in the file
    #[error("station {from} links to unknown station {to}")]
    UnknownStation { from: String, to: String },

    /// A link has an unusable time or distance
    #[error("invalid link {from} -> {to}: {reason}")]
    InvalidLink {
        from: String,
        to: String,
        reason: &'static str,
    },

    /// Graph construction failed
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// A directed link from one station to a neighbour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// Name of the neighbouring station.
    pub station: String,

    /// Line the link belongs to.
    pub line: LineId,

    /// Distance in meters.
    pub distance: f64,

    /// Average speed in meters per second. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,

    /// Travel time in seconds.
    pub time: f64,
}

impl LinkRecord {
    fn validate(&self, from: &str) -> Result<(), LoadError> {
        let invalid = |reason| LoadError::InvalidLink {
            from: from.to_string(),
            to: self.station.clone(),
            reason,
        };

        if self.time < 0.0 {
            return Err(invalid("time must be non-negative"));
        }
        if self.distance < 0.0 {
            return Err(invalid("distance must be non-negative"));
        }
        Ok(())
    }
}

/// One station and its outgoing links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StationRecord {
    /// Outgoing links.
    #[serde(rename = "edge", default)]
    pub links: Vec<LinkRecord>,

    /// Lines serving the station.
    #[serde(default)]
    pub lines: Vec<LineId>,

    /// Number of lines serving the station, as recorded in the file.
    #[serde(rename = "line_siz", default)]
    pub line_count: usize,
}

/// All stations of a network, keyed by name.
///
/// Stations are kept in name order, which fixes their vertex indices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topology {
    stations: BTreeMap<String, StationRecord>,
}

impl Topology {
    /// Create an empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a topology from JSON and validate it.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let topology: Topology = serde_json::from_str(json)?;
        topology.validate()?;
        Ok(topology)
    }

    /// Read and parse the station file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Add or replace a station.
    pub fn insert(&mut self, name: impl Into<String>, record: StationRecord) {
        self.stations.insert(name.into(), record);
    }

    /// Add a link, creating either station if needed.
    pub fn add_link(&mut self, from: &str, to: &str, line: LineId, time: f64, distance: f64) {
        self.stations.entry(to.to_string()).or_default();

        let record = self.stations.entry(from.to_string()).or_default();
        if !record.lines.contains(&line) {
            record.lines.push(line.clone());
            record.line_count = record.lines.len();
        }
        record.links.push(LinkRecord {
            station: to.to_string(),
            line,
            distance,
            speed: None,
            time,
        });
    }

    /// Stations in index order.
    pub fn stations(&self) -> impl Iterator<Item = (&str, &StationRecord)> {
        self.stations.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if there are no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Check that every link targets a known station and has usable weights.
    pub fn validate(&self) -> Result<(), LoadError> {
        for (name, record) in &self.stations {
            for link in &record.links {
                if !self.stations.contains_key(&link.station) {
                    return Err(LoadError::UnknownStation {
                        from: name.clone(),
                        to: link.station.clone(),
                    });
                }
                link.validate(name)?;
            }
        }
        Ok(())
    }
}
