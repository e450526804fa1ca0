//! Route planner: k-path search and evaluation of its results.
//!
//! Two searches share one skeleton: a best-first frontier expansion that
//! collects up to `k` candidate paths, ranked either by fewest transfers or
//! by least travel time with the other metric as tie-break. Evaluation then
//! picks a single best candidate and prices it.

mod config;
mod evaluate;
mod itinerary;
mod plan;
mod ranking;
mod search;

pub use config::SearchConfig;
pub use evaluate::{
    TripSummary, choose_best, compute_arrival, compute_fare, evaluate, trip_minutes,
};
pub use itinerary::{Itinerary, RouteLeg};
pub use plan::{RoutePlan, plan_route};
pub use search::{
    PathCandidate, PathSearch, RouteMode, SearchResult, find_time_optimal_paths,
    find_transfer_optimal_paths,
};
