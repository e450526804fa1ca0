//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::domain::EvaluationError;
use crate::planner::plan_route;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(search_stations))
        .route("/lines", get(list_lines))
        .route("/lines/reset", post(reset_lines))
        .route("/lines/:line/close", post(close_line))
        .route("/lines/:line/open", post(open_line))
        .route("/route", get(plan))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by (possibly misspelled) name.
async fn search_stations(
    State(state): State<AppState>,
    Query(req): Query<StationSearchRequest>,
) -> Json<StationSearchResponse> {
    let limit = req.limit.unwrap_or(10).min(50);
    let network = state.network.read().await;

    let stations = network
        .stations()
        .search(&req.q, limit)
        .into_iter()
        .map(|(vertex, name)| StationResult {
            index: vertex.index(),
            name: name.to_string(),
        })
        .collect();

    Json(StationSearchResponse { stations })
}

/// List every line and whether it is open.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let network = state.network.read().await;
    let lines = network.lines().into_iter().map(LineResult::from).collect();
    Json(LinesResponse { lines })
}

/// Close a line.
async fn close_line(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<LineChangeResponse>, AppError> {
    set_line(&state, &line, false).await
}

/// Reopen a line.
async fn open_line(
    State(state): State<AppState>,
    Path(line): Path<String>,
) -> Result<Json<LineChangeResponse>, AppError> {
    set_line(&state, &line, true).await
}

async fn set_line(
    state: &AppState,
    query: &str,
    open: bool,
) -> Result<Json<LineChangeResponse>, AppError> {
    let mut network = state.network.write().await;
    let line = network.resolve_line(query).ok_or_else(|| AppError::NotFound {
        message: format!("Unknown line: {query}"),
    })?;

    let edges = if open {
        network.open_line(&line)
    } else {
        network.close_line(&line)
    };

    Ok(Json(LineChangeResponse {
        line: line.to_string(),
        open,
        edges,
    }))
}

/// Reopen every line.
async fn reset_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let mut network = state.network.write().await;
    network.reset();
    let lines = network.lines().into_iter().map(LineResult::from).collect();
    Json(LinesResponse { lines })
}

/// Plan the best route between two stations.
async fn plan(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let departure = match req.depart.as_deref() {
        Some(hhmm) => departure_today(hhmm)?,
        None => now_to_the_minute(),
    };

    let network = state.network.read().await;
    let resolve = |query: &str| {
        network
            .resolve_station(query)
            .ok_or_else(|| AppError::NotFound {
                message: format!("Unknown station: {query}"),
            })
    };
    let from = resolve(&req.from)?;
    let to = resolve(&req.to)?;

    let mode = req.mode.unwrap_or_default();
    let plan = plan_route(network.graph(), &state.config, mode, from, to, departure)?
        .ok_or_else(|| AppError::NotFound {
            message: format!(
                "No route from {} to {}",
                network.station_name(from),
                network.station_name(to)
            ),
        })?;

    Ok(Json(RouteResponse::from_plan(&plan, &network)))
}

/// The current local time with seconds dropped.
fn now_to_the_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// `hhmm` on today's date.
fn departure_today(hhmm: &str) -> Result<NaiveDateTime, AppError> {
    let time = NaiveTime::parse_from_str(hhmm.trim(), "%H:%M").map_err(|_| {
        AppError::BadRequest {
            message: format!("Invalid departure time (expected HH:MM): {hhmm}"),
        }
    })?;
    Ok(Local::now().date_naive().and_time(time))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<EvaluationError> for AppError {
    fn from(e: EvaluationError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
