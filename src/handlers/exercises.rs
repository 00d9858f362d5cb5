use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Exercise, ExercisePayload};
use crate::repositories::ExerciseRepository;
use crate::validation::PayloadError;

/// Request body as received, so malformed JSON can be reported like any
/// other invalid payload.
type JsonBody = std::result::Result<Json<Value>, JsonRejection>;

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

/// Turn a request body into a typed payload, rejecting anything that is not
/// exactly the five valid fields. Unreadable JSON counts as invalid too.
fn parse_payload(body: JsonBody) -> Result<ExercisePayload> {
    let Json(value) = body.map_err(|e| PayloadError::Malformed(e.body_text()))?;
    Ok(ExercisePayload::from_json(&value)?)
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("exercise {id}"))
}

pub async fn create(
    State(state): State<ExercisesState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<Exercise>)> {
    let payload = parse_payload(body)?;
    let exercise = state.exercise_repo.insert(payload).await?;

    tracing::info!("Created exercise {}", exercise.id);
    Ok((StatusCode::CREATED, Json(exercise)))
}

pub async fn list(State(state): State<ExercisesState>) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercise_repo.find_all().await?;
    Ok(Json(exercises))
}

pub async fn show(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>> {
    let exercise = state
        .exercise_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(exercise))
}

pub async fn update(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
    body: JsonBody,
) -> Result<Json<Exercise>> {
    let payload = parse_payload(body)?;

    if state.exercise_repo.find_by_id(&id).await?.is_none() {
        return Err(not_found(&id));
    }

    // The row can still disappear between the lookup and the write.
    if !state.exercise_repo.update_by_id(&id, payload).await? {
        return Err(not_found(&id));
    }

    let updated = state
        .exercise_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    tracing::info!("Updated exercise {}", id);
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ExercisesState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    if state.exercise_repo.delete_by_id(&id).await? == 0 {
        return Err(not_found(&id));
    }

    tracing::info!("Deleted exercise {}", id);
    Ok(StatusCode::NO_CONTENT)
}
