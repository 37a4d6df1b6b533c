// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User and exercise log routes.

use crate::dates;
use crate::error::{AppError, Result};
use crate::models::{Exercise, User};
use crate::AppState;
use axum::{
    extract::{Json, Path, Query, State},
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// User and log routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Create / List Users ─────────────────────────────────────

#[derive(Deserialize)]
struct CreateUserRequest {
    #[serde(default)]
    username: Option<String>,
}

/// New user response.
#[derive(Serialize)]
pub struct CreateUserResponse {
    pub username: String,
    pub id: String,
}

/// Create a new user.
///
/// Uniqueness is a check-then-insert: two concurrent creations with the
/// same username can both pass the pre-check. Firestore has no unique
/// field constraint, so the race is accepted.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateUserRequest>,
) -> Result<Json<CreateUserResponse>> {
    let username = body.username.as_deref().map(str::trim).unwrap_or_default();
    if username.is_empty() {
        return Err(AppError::Validation("Invalid username".to_string()));
    }

    if state.db.find_user_by_username(username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }

    let user = state.db.create_user(username).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User created");

    Ok(Json(CreateUserResponse {
        username: user.username,
        id: user.id,
    }))
}

/// List all users as their raw stored documents.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    let users = state.db.list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

// ─── Add Exercise ────────────────────────────────────────────

#[derive(Deserialize)]
struct AddExerciseRequest {
    #[serde(default)]
    description: Option<String>,
    /// Clients send numbers or numeric strings interchangeably
    #[serde(default)]
    duration: Option<serde_json::Value>,
    #[serde(default)]
    date: Option<String>,
}

/// Exercise append response.
#[derive(Serialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

/// Coerce a JSON duration value to whole minutes.
fn coerce_duration(raw: &serde_json::Value) -> Option<i64> {
    match raw {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Append an exercise to a user's log.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<AddExerciseRequest>,
) -> Result<Json<ExerciseResponse>> {
    let description = body.description.as_deref().map(str::trim).unwrap_or_default();
    if description.is_empty() {
        return Err(AppError::Validation("Invalid request".to_string()));
    }

    // Non-numeric durations and garbage dates are rejected outright
    // rather than stored as sentinel values.
    let duration = match &body.duration {
        Some(raw) => coerce_duration(raw)
            .ok_or_else(|| AppError::Validation("Invalid duration".to_string()))?,
        None => return Err(AppError::Validation("Invalid request".to_string())),
    };

    let date = match body.date.as_deref() {
        Some(raw) => dates::parse_input(raw)
            .ok_or_else(|| AppError::Validation("Invalid date".to_string()))?,
        None => dates::today(),
    };

    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let exercise = Exercise {
        description: description.to_string(),
        duration,
        date: dates::format_date(date),
    };

    state.db.append_exercise(&user.id, &exercise).await?;
    tracing::info!(
        user_id = %user.id,
        duration = exercise.duration,
        date = %exercise.date,
        "Exercise appended"
    );

    Ok(Json(ExerciseResponse {
        id: user.id,
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        date: exercise.date,
    }))
}

// ─── List Logs ───────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    /// Date lower bound, inclusive (YYYY-MM-DD)
    from: Option<String>,
    /// Date upper bound, inclusive (YYYY-MM-DD)
    to: Option<String>,
    /// Max number of entries returned from the start of the log
    limit: Option<usize>,
}

/// Log query response.
#[derive(Serialize)]
pub struct LogsResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<Exercise>,
}

fn parse_date_bound(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>> {
    match raw {
        Some(s) => dates::parse_input(s)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Invalid '{}' date", name))),
        None => Ok(None),
    }
}

/// Filter a log by inclusive calendar-date bounds, then truncate.
///
/// Bounds compare against dates parsed back out of the stored strings;
/// an entry whose stored date no longer parses cannot be compared and is
/// dropped by an active bound.
fn filter_log(
    log: Vec<Exercise>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    limit: Option<usize>,
) -> Vec<Exercise> {
    let mut entries: Vec<Exercise> = log
        .into_iter()
        .filter(|entry| {
            if from.is_none() && to.is_none() {
                return true;
            }
            match dates::parse_stored(&entry.date) {
                Some(date) => {
                    from.map_or(true, |f| date >= f) && to.map_or(true, |t| date <= t)
                }
                None => false,
            }
        })
        .collect();

    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

/// Get a user's exercise log with optional range filtering.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogsResponse>> {
    // Reject malformed bounds before touching the store.
    let from = parse_date_bound(params.from.as_deref(), "from")?;
    let to = parse_date_bound(params.to.as_deref(), "to")?;

    let user = state
        .db
        .get_user(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    tracing::debug!(
        user_id = %user.id,
        from = ?params.from,
        to = ?params.to,
        limit = ?params.limit,
        "Fetching logs"
    );

    let log = filter_log(user.log, from, to, params.limit);

    Ok(Json(LogsResponse {
        id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}
