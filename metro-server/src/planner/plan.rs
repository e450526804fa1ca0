//! One-call route planning: search, pick, price and split into legs.

use chrono::NaiveDateTime;

use crate::domain::{EvaluationError, Vertex};
use crate::graph::Graph;

use super::config::SearchConfig;
use super::evaluate::{TripSummary, choose_best, evaluate};
use super::itinerary::Itinerary;
use super::search::{PathCandidate, PathSearch, RouteMode};

/// The route offered to a rider.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// Criterion the search optimized.
    pub mode: RouteMode,

    /// The chosen candidate.
    pub candidate: PathCandidate,

    /// The chosen path split into per-line legs.
    pub itinerary: Itinerary,

    /// Duration, fare and arrival estimate.
    pub summary: TripSummary,

    /// Number of candidates the search produced.
    pub alternatives: usize,
}

/// Plan a route from `start` to `end` departing at `departure`.
///
/// Returns `Ok(None)` when no route exists over the active edges.
pub fn plan_route(
    graph: &Graph,
    config: &SearchConfig,
    mode: RouteMode,
    start: Vertex,
    end: Vertex,
    departure: NaiveDateTime,
) -> Result<Option<RoutePlan>, EvaluationError> {
    let result = PathSearch::new(graph, config).find(mode, start, end)?;
    if result.candidates.is_empty() {
        return Ok(None);
    }

    let best = choose_best(&result.candidates)?.clone();
    let itinerary = Itinerary::from_path(graph, best.path())?;
    let summary = evaluate(&best, config, departure);

    Ok(Some(RoutePlan {
        mode,
        candidate: best,
        itinerary,
        summary,
        alternatives: result.candidates.len(),
    }))
}
