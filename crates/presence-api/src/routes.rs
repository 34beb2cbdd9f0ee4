//! Dashboard endpoints.
//!
//! All endpoints are read-only and return JSON. Per-weekday results are
//! ordered sequences of `[abbreviation, value...]` rows, `Mon..Sun`, Monday
//! first, always seven data rows regardless of how much data the user has.
//! Requests for a user id absent from the log answer `200` with an empty
//! array – unknown users are a policy, not an error.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{Path as UrlPath, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

use presence_core::models::{PresenceLog, UserId};
use presence_data::aggregator::{
    group_by_weekday, group_by_weekday_in_secs, mean, WEEKDAY_ABBR,
};

use crate::error::ApiError;
use crate::state::AppState;

// ── Router assembly ───────────────────────────────────────────────────────────

/// Build the full application router.
///
/// When `static_dir` is given, its contents are served for any path the API
/// does not claim (the dashboard's HTML/JS assets).
pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = api_router().with_state(state);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http())
}

/// The `/api/v1` route table, without middleware or static assets.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/users", get(users_view))
        .route("/api/v1/mean_time_weekday/:user_id", get(mean_time_weekday_view))
        .route("/api/v1/presence_weekday/:user_id", get(presence_weekday_view))
        .route("/api/v1/presence_start_end/:user_id", get(presence_start_end_view))
}

// ── Types ─────────────────────────────────────────────────────────────────────

/// One row of the user-listing dropdown.
#[derive(Debug, Clone, Serialize)]
pub struct UserEntry {
    pub user_id: UserId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// GET /api/v1/users – users present in the log, ascending id.
async fn users_view(State(state): State<AppState>) -> Result<Json<Vec<UserEntry>>, ApiError> {
    let log = snapshot(&state).await?;

    let users = log
        .user_ids()
        .map(|user_id| UserEntry {
            user_id,
            name: state.directory.display_name(user_id),
            avatar: state.directory.avatar_url(user_id).map(str::to_string),
        })
        .collect();

    Ok(Json(users))
}

/// GET /api/v1/mean_time_weekday/{user_id} – mean presence time per weekday.
async fn mean_time_weekday_view(
    State(state): State<AppState>,
    UrlPath(user_id): UrlPath<UserId>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let log = snapshot(&state).await?;
    let Some(days) = log.user(user_id) else {
        debug!("User {} not found", user_id);
        return Ok(Json(Vec::new()));
    };

    let weekdays = group_by_weekday(days);
    let result = WEEKDAY_ABBR
        .iter()
        .zip(weekdays.buckets.iter())
        .map(|(abbr, intervals)| json!([abbr, mean(intervals)]))
        .collect();

    Ok(Json(result))
}

/// GET /api/v1/presence_weekday/{user_id} – total presence time per weekday,
/// preceded by a column-header row.
async fn presence_weekday_view(
    State(state): State<AppState>,
    UrlPath(user_id): UrlPath<UserId>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let log = snapshot(&state).await?;
    let Some(days) = log.user(user_id) else {
        debug!("User {} not found", user_id);
        return Ok(Json(Vec::new()));
    };

    let weekdays = group_by_weekday(days);
    let mut result = vec![json!(["Weekday", "Presence (s)"])];
    result.extend(
        WEEKDAY_ABBR
            .iter()
            .zip(weekdays.buckets.iter())
            .map(|(abbr, intervals)| {
                let total: i64 = intervals.iter().map(|&v| i64::from(v)).sum();
                json!([abbr, total])
            }),
    );

    Ok(Json(result))
}

/// GET /api/v1/presence_start_end/{user_id} – mean arrival and departure
/// seconds-since-midnight per weekday.
async fn presence_start_end_view(
    State(state): State<AppState>,
    UrlPath(user_id): UrlPath<UserId>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let log = snapshot(&state).await?;
    let Some(days) = log.user(user_id) else {
        debug!("User {} not found", user_id);
        return Ok(Json(Vec::new()));
    };

    let grouped = group_by_weekday_in_secs(days);
    let result = WEEKDAY_ABBR
        .iter()
        .enumerate()
        .map(|(weekday, abbr)| {
            json!([abbr, mean(&grouped.start[weekday]), mean(&grouped.end[weekday])])
        })
        .collect();

    Ok(Json(result))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Fetch the current presence-log snapshot off the async executor.
///
/// The cache blocks on its mutex and on file I/O, so the call runs on the
/// blocking pool.
async fn snapshot(state: &AppState) -> Result<Arc<PresenceLog>, ApiError> {
    let cache = Arc::clone(&state.cache);
    tokio::task::spawn_blocking(move || cache.get())
        .await
        .map_err(|e| ApiError::Internal(format!("loader task failed: {e}")))?
        .map_err(ApiError::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
