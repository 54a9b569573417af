//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::advisory::{AdvisoryError, AdvisoryRequest, FailureCategory};
use crate::directory::{DirectoryError, FeedbackSummary, Recommendation};
use crate::domain::{CoachClass, RouteId, Station, StationId};

use super::dto::*;
use super::state::AppState;

/// Header carrying the optional commuter identity for feedback.
const USER_ID_HEADER: &str = "x-user-id";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(list_routes))
        .route("/api/routes/:route_id/stations", get(route_stations))
        .route("/api/stations/:station_id", get(get_station))
        .route(
            "/api/stations/:station_id/recommendation",
            get(recommendation),
        )
        .route("/api/stations/:station_id/verify", post(verify_station))
        .route(
            "/api/stations/:station_id/feedback",
            get(feedback_summary).post(add_feedback),
        )
        .route(
            "/api/stations/:station_id/live-status",
            get(station_live_status),
        )
        .route("/api/live-status", post(live_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Active lines.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let routes = state.directory.active_routes().await;
    Json(RoutesResponse { routes })
}

/// Stations on a line, in order.
async fn route_stations(
    State(state): State<AppState>,
    Path(route_id): Path<RouteId>,
) -> Result<Json<RouteStationsResponse>, AppError> {
    let route = state
        .directory
        .route(route_id)
        .await
        .ok_or(DirectoryError::RouteNotFound(route_id))?;
    let stations = state.directory.stations_by_route(route_id).await?;

    Ok(Json(RouteStationsResponse { route, stations }))
}

/// A single station.
async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
) -> Result<Json<Station>, AppError> {
    let station = state
        .directory
        .station(station_id)
        .await
        .ok_or(DirectoryError::StationNotFound(station_id))?;

    Ok(Json(station))
}

/// Best coach to board for a class.
async fn recommendation(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    Query(query): Query<CoachQuery>,
) -> Result<Json<Recommendation>, AppError> {
    let class = parse_coach(query.coach.as_deref())?;
    let recommendation = state.directory.recommend(station_id, class).await?;
    Ok(Json(recommendation))
}

/// Confirm a recommendation was helpful.
///
/// Bumps the verified counter and records helpful feedback.
async fn verify_station(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    headers: HeaderMap,
) -> Result<Json<VerifyResponse>, AppError> {
    let verified_count = state.directory.increment_verified(station_id).await?;
    state
        .feedback
        .record(station_id, true, user_id(&headers))
        .await;

    Ok(Json(VerifyResponse {
        station_id,
        verified_count,
    }))
}

/// Leave thumbs-up or thumbs-down feedback.
async fn add_feedback(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    headers: HeaderMap,
    Json(req): Json<FeedbackRequest>,
) -> Result<(StatusCode, Json<FeedbackSummary>), AppError> {
    ensure_station(&state, station_id).await?;
    state
        .feedback
        .record(station_id, req.is_helpful, user_id(&headers))
        .await;

    let summary = state.feedback.summary(station_id).await;
    Ok((StatusCode::CREATED, Json(summary)))
}

/// Feedback counts for a station.
async fn feedback_summary(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
) -> Result<Json<FeedbackSummary>, AppError> {
    ensure_station(&state, station_id).await?;
    Ok(Json(state.feedback.summary(station_id).await))
}

/// Live status for a station, with display names looked up in the directory.
async fn station_live_status(
    State(state): State<AppState>,
    Path(station_id): Path<StationId>,
    Query(query): Query<CoachQuery>,
) -> Result<Json<LiveStatusResponse>, AppError> {
    let class = parse_coach(query.coach.as_deref())?;
    let request = state.directory.advisory_request(station_id, class).await?;
    let status = state.advisor.get_live_status(&request).await?;

    Ok(Json(LiveStatusResponse { status }))
}

/// Live status for caller-supplied display names.
async fn live_status(
    State(state): State<AppState>,
    payload: Result<Json<AdvisoryRequest>, JsonRejection>,
) -> Result<Json<LiveStatusResponse>, AppError> {
    let Json(request) = payload?;
    if request.route_name.trim().is_empty() || request.station_name.trim().is_empty() {
        return Err(AppError::BadRequest {
            message: "routeName and stationName must not be empty".to_string(),
        });
    }

    let status = state.advisor.get_live_status(&request).await?;
    Ok(Json(LiveStatusResponse { status }))
}

fn parse_coach(coach: Option<&str>) -> Result<CoachClass, AppError> {
    match coach {
        None => Ok(CoachClass::default()),
        Some(s) => s.parse::<CoachClass>().map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        }),
    }
}

fn user_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

async fn ensure_station(state: &AppState, station_id: StationId) -> Result<(), AppError> {
    if state.directory.station(station_id).await.is_none() {
        return Err(DirectoryError::StationNotFound(station_id).into());
    }
    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
    Advisory(AdvisoryError),
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::RouteNotFound(_) | DirectoryError::StationNotFound(_) => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            _ => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl From<AdvisoryError> for AppError {
    fn from(e: AdvisoryError) -> Self {
        AppError::Advisory(e)
    }
}

/// HTTP status for a live status failure.
fn advisory_status(category: FailureCategory) -> StatusCode {
    match category {
        FailureCategory::Timeout => StatusCode::GATEWAY_TIMEOUT,
        FailureCategory::RateLimited => StatusCode::TOO_MANY_REQUESTS,
        FailureCategory::AuthFailure
        | FailureCategory::BadRequest
        | FailureCategory::UpstreamError
        | FailureCategory::ResponseParseError => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, category) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
            AppError::Advisory(e) => (
                advisory_status(e.category()),
                e.message().to_string(),
                Some(e.category()),
            ),
        };

        warn!(%status, "{message}");

        let body = Json(ErrorResponse {
            error: message,
            category,
        });
        (status, body).into_response()
    }
}
