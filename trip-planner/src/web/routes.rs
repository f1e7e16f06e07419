//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info, warn};

use crate::domain::DomainError;
use crate::planner::{PathFinder, SearchError, SearchOutcome};
use crate::traffic::RandomSampler;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/cities", get(list_cities))
        .route("/api/route", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Cities available for planning, in registration order.
async fn list_cities(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .graph
            .list_cities()
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Plan the fastest route between two cities under today's traffic.
async fn plan_route(
    State(state): State<AppState>,
    Json(req): Json<PlanRouteRequest>,
) -> Result<Json<PlanRouteResponse>, AppError> {
    let departure = req.departure.trim();
    let destination = req.destination.trim();

    if departure.is_empty() || destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "Both departure and destination cities must be provided".to_string(),
        });
    }
    if departure.eq_ignore_ascii_case(destination) {
        return Err(AppError::BadRequest {
            message: "Departure and destination cities cannot be the same".to_string(),
        });
    }

    let day_type = state.traffic.day_type_for(&state.clock.now());

    // Fresh sampler per request so concurrent searches never share draws
    let mut sampler = RandomSampler::new(&state.traffic);
    let finder = PathFinder::new(&state.graph, &state.traffic, &state.config);

    match finder.find_path(departure, destination, day_type, &mut sampler)? {
        SearchOutcome::Found(trip) => {
            info!(
                departure,
                destination,
                %day_type,
                minutes = trip.total_minutes(),
                hops = trip.hop_count(),
                "Planned route"
            );
            Ok(Json(PlanRouteResponse::from_trip(&trip, day_type)))
        }
        SearchOutcome::NotFound => Err(AppError::NotFound {
            message: format!("No route available from {departure} to {destination}"),
        }),
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Domain(DomainError::UnknownCity(_)) => AppError::NotFound {
                message: e.to_string(),
            },
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::Internal { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = self.message().to_string();

        if status.is_server_error() {
            error!(%status, %message, "Request failed");
        } else {
            warn!(%status, %message, "Request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
