//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Vertex;
use crate::network::{LineStatus, Network};
use crate::planner::{RouteMode, RoutePlan};

/// Request to search stations by name.
#[derive(Debug, Deserialize)]
pub struct StationSearchRequest {
    /// Typed station name, possibly misspelled
    pub q: String,

    /// Maximum number of results (default 10, capped at 50)
    pub limit: Option<usize>,
}

/// A station in search results.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationResult {
    /// Vertex index of the station
    pub index: usize,

    /// Station name
    pub name: String,
}

/// Response for station search.
#[derive(Debug, Serialize, Deserialize)]
pub struct StationSearchResponse {
    /// Matching stations, best first
    pub stations: Vec<StationResult>,
}

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// What to optimize (defaults to fastest)
    pub mode: Option<RouteMode>,

    /// Departure time in HH:MM format (defaults to now)
    pub depart: Option<String>,
}

/// A stretch of a route on one line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LegResult {
    /// Line ridden
    pub line: String,

    /// Stations from boarding to alighting
    pub stations: Vec<String>,
}

/// A planned route.
#[derive(Debug, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Resolved origin station name
    pub from: String,

    /// Resolved destination station name
    pub to: String,

    /// Criterion the search optimized
    pub mode: RouteMode,

    /// Every station on the route, in order
    pub stations: Vec<String>,

    /// The route split into per-line legs
    pub legs: Vec<LegResult>,

    /// Number of line changes
    pub transfers: usize,

    /// Total trip time in minutes, dwell and transfers included
    pub duration_mins: i64,

    /// Total distance in kilometers
    pub distance_km: f64,

    /// Fare in yuan
    pub fare: u32,

    /// Departure time (HH:MM)
    pub departure_time: String,

    /// Estimated arrival time (HH:MM)
    pub arrival_time: String,

    /// Number of candidate routes considered
    pub alternatives: usize,
}

impl RouteResponse {
    /// Build the response for `plan`, naming stations through `network`.
    pub fn from_plan(plan: &RoutePlan, network: &Network) -> Self {
        let name = |v: &Vertex| network.station_name(*v);
        let path = plan.candidate.path();

        Self {
            from: path.first().map(name).unwrap_or_default(),
            to: path.last().map(name).unwrap_or_default(),
            mode: plan.mode,
            stations: path.iter().map(name).collect(),
            legs: plan
                .itinerary
                .legs()
                .iter()
                .map(|leg| LegResult {
                    line: leg.line.to_string(),
                    stations: leg.stations.iter().map(name).collect(),
                })
                .collect(),
            transfers: plan.summary.transfers,
            duration_mins: plan.summary.minutes,
            distance_km: (plan.summary.distance_km() * 100.0).round() / 100.0,
            fare: plan.summary.fare,
            departure_time: plan.summary.departure.format("%H:%M").to_string(),
            arrival_time: plan.summary.arrival.format("%H:%M").to_string(),
            alternatives: plan.alternatives,
        }
    }
}

/// A line and whether it is running.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineResult {
    /// Line name
    pub line: String,

    /// False while the line is closed
    pub open: bool,
}

impl From<LineStatus> for LineResult {
    fn from(status: LineStatus) -> Self {
        Self {
            line: status.line.to_string(),
            open: status.open,
        }
    }
}

/// Response listing all lines.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinesResponse {
    /// Every known line
    pub lines: Vec<LineResult>,
}

/// Response to closing or opening a line.
#[derive(Debug, Serialize, Deserialize)]
pub struct LineChangeResponse {
    /// Resolved line name
    pub line: String,

    /// State of the line after the change
    pub open: bool,

    /// Number of edges whose state was set
    pub edges: usize,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
}
