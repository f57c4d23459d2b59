//! Comment endpoints, with the same soft-invalidation surface as messages.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use corkboard_store::{Comment, CommentRepo, ExecOutcome};

use crate::envelope::{ok_empty, StructuredResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CommentRequest {
    pub email: String,
    pub comment: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/comments", get(list).post(create))
        .route("/comments/{id}", get(get_one).put(update).delete(remove))
        .route("/comments/{id}/invalidate", put(invalidate))
        .route("/comments/invalid", get(list_invalid))
}

/// GET /comments
async fn list(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<Comment>>>, ApiError> {
    let rows = CommentRepo::new(state.pool()).select_all().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /comments/invalid
async fn list_invalid(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<Comment>>>, ApiError> {
    let rows = CommentRepo::new(state.pool()).select_invalid().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /comments/{id}
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<Comment>>, ApiError> {
    let row = CommentRepo::new(state.pool())
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("comment", id))?;
    Ok(Json(StructuredResponse::ok(row)))
}

/// POST /comments - insert, answer with the assigned id.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<StructuredResponse<i32>>, ApiError> {
    let id = CommentRepo::new(state.pool())
        .insert(&req.email, &req.comment)
        .await?;
    Ok(Json(StructuredResponse::ok(id)))
}

/// PUT /comments/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match CommentRepo::new(state.pool())
        .update(id, &req.email, &req.comment)
        .await?
    {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("comment updated"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("comment", id)),
    }
}

/// DELETE /comments/{id}
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    CommentRepo::new(state.pool()).delete(id).await?;
    Ok(Json(ok_empty("deleted")))
}

/// PUT /comments/{id}/invalidate
async fn invalidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match CommentRepo::new(state.pool()).invalidate(id).await? {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("invalidated comment"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("comment", id)),
    }
}
