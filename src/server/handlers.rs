use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── GET /api/resolve ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub city: Option<String>,
}

#[derive(Serialize)]
pub struct ResolveResponse {
    pub city: String,
    pub country: String,
    pub ready: bool,
}

pub async fn resolve(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, Response> {
    let start = Instant::now();

    let city = params.city.as_deref().unwrap_or("").trim();
    if city.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'city' parameter").into_response());
    }

    // Awaits initialization on the first request; concurrent requests
    // share the same in-flight load.
    let country = state.resolver.resolve(city).await;

    let elapsed = start.elapsed();
    eprintln!(
        "[{}] GET /api/resolve?city={} -> {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        city,
        country.as_deref().unwrap_or("(no match)"),
        elapsed.as_secs_f64() * 1000.0,
    );

    match country {
        Some(country) => Ok(Json(ResolveResponse {
            city: city.to_string(),
            country,
            ready: state.resolver.is_ready(),
        })),
        None => Err(api_error(
            StatusCode::NOT_FOUND,
            format!("No country found for '{}'", city),
        )
        .into_response()),
    }
}

// ─── GET /api/status ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    pub entries: usize,
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        ready: state.resolver.is_ready(),
        entries: state.resolver.entry_count(),
    })
}
