//! Evaluation of search results: best candidate, duration, fare and arrival.

use std::cmp::Ordering;

use chrono::{Duration, NaiveDateTime};
use crate::domain::EvaluationError;

use super::config::SearchConfig;
use super::search::PathCandidate;

/// Fare in yuan for distances up to each bound (kilometers).
const FARE_BANDS: [(f64, u32); 4] = [(6.0, 3), (12.0, 4), (22.0, 5), (32.0, 6)];

/// Kilometers of travel bought by each yuan beyond the last band.
const KM_PER_EXTRA_YUAN: f64 = 20.0;

/// Pick the single best candidate.
///
/// Candidates are compared by transfers, then time, then distance, whichever
/// search produced them. The first of several equal candidates wins.
pub fn choose_best(candidates: &[PathCandidate]) -> Result<&PathCandidate, EvaluationError> {
    candidates
        .iter()
        .min_by(|a, b| compare_overall(a, b))
        .ok_or(EvaluationError::EmptyCandidateSet)
}

fn compare_overall(a: &PathCandidate, b: &PathCandidate) -> Ordering {
    a.transfers()
        .cmp(&b.transfers())
        .then_with(|| a.time().total_cmp(&b.time()))
        .then_with(|| a.distance().total_cmp(&b.distance()))
}

/// Ticket price in yuan for a trip of `distance_m` meters.
///
/// 3 up to 6 km, 4 up to 12 km, 5 up to 22 km, 6 up to 32 km, then one more
/// yuan for every started 20 km.
pub fn compute_fare(distance_m: f64) -> u32 {
    let km = distance_m / 1000.0;

    for (limit, fare) in FARE_BANDS {
        if km <= limit {
            return fare;
        }
    }

    let (last_limit, last_fare) = FARE_BANDS[FARE_BANDS.len() - 1];
    let extra = ((km - last_limit) / KM_PER_EXTRA_YUAN).ceil();
    // Saturates for infinite distances.
    last_fare.saturating_add(extra as u32)
}

/// The time `total_minutes` after `start`.
pub fn compute_arrival(start: NaiveDateTime, total_minutes: i64) -> NaiveDateTime {
    start + Duration::minutes(total_minutes)
}

/// Whole minutes a trip takes, including dwell time at every stop but the
/// last.
pub fn trip_minutes(candidate: &PathCandidate, dwell_secs: i64) -> i64 {
    let dwell = (candidate.hops() as i64 * dwell_secs) as f64;
    ((candidate.time() + dwell) / 60.0).floor() as i64
}

/// Everything shown to a rider about one chosen route.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSummary {
    /// Door-to-door minutes, dwell and transfer penalties included.
    pub minutes: i64,

    /// Distance in meters.
    pub distance_m: f64,

    /// Fare in yuan.
    pub fare: u32,

    /// Number of line changes.
    pub transfers: usize,

    /// When the trip starts.
    pub departure: NaiveDateTime,

    /// Estimated arrival at the destination.
    pub arrival: NaiveDateTime,
}

impl TripSummary {
    /// Distance in kilometers.
    pub fn distance_km(&self) -> f64 {
        self.distance_m / 1000.0
    }
}

/// Summarize `candidate` for a trip starting at `departure`.
pub fn evaluate(
    candidate: &PathCandidate,
    config: &SearchConfig,
    departure: NaiveDateTime,
) -> TripSummary {
    let minutes = trip_minutes(candidate, config.dwell_secs);
    TripSummary {
        minutes,
        distance_m: candidate.distance(),
        fare: compute_fare(candidate.distance()),
        transfers: candidate.transfers(),
        departure,
        arrival: compute_arrival(departure, minutes),
    }
}
