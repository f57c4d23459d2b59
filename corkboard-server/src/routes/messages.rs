//! Message endpoints.
//!
//! The like/unlike/invalidate routes address the message by path parameter;
//! the old API read the id out of the request body, which made the path
//! segment decorative.

use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::Deserialize;

use corkboard_store::{ExecOutcome, Message, MessageRepo};

use crate::envelope::{ok_empty, StructuredResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateMessageRequest {
    pub subject: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct UpdateMessageRequest {
    pub message: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/messages", get(list).post(create))
        .route(
            "/messages/{id}",
            get(get_one).put(update).delete(remove),
        )
        .route("/messages/{id}/like", put(like))
        .route("/messages/{id}/unlike", put(unlike))
        .route("/messages/{id}/invalidate", put(invalidate))
        .route("/messages/invalid", get(list_invalid))
}

/// GET /messages - every message, store order.
async fn list(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<Message>>>, ApiError> {
    let rows = MessageRepo::new(state.pool()).select_all().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /messages/invalid - messages whose validity counter reached zero.
async fn list_invalid(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<Message>>>, ApiError> {
    let rows = MessageRepo::new(state.pool()).select_invalid().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /messages/{id}
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<Message>>, ApiError> {
    let row = MessageRepo::new(state.pool())
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("message", id))?;
    Ok(Json(StructuredResponse::ok(row)))
}

/// POST /messages - insert, answer with the assigned id.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<Json<StructuredResponse<i32>>, ApiError> {
    let id = MessageRepo::new(state.pool())
        .insert(&req.subject, &req.message)
        .await?;
    Ok(Json(StructuredResponse::ok(id)))
}

/// PUT /messages/{id} - replace the body.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateMessageRequest>,
) -> Result<Json<StructuredResponse<String>>, ApiError> {
    match MessageRepo::new(state.pool()).update(id, &req.message).await? {
        ExecOutcome::Updated(_) => Ok(Json(StructuredResponse::ok(req.message))),
        ExecOutcome::NotFound => Err(ApiError::not_found("message", id)),
    }
}

/// DELETE /messages/{id} - deleting an absent row is not an error.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    MessageRepo::new(state.pool()).delete(id).await?;
    Ok(Json(ok_empty("deleted")))
}

/// PUT /messages/{id}/like
async fn like(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match MessageRepo::new(state.pool()).increment_likes(id).await? {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("liked message"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("message", id)),
    }
}

/// PUT /messages/{id}/unlike
async fn unlike(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match MessageRepo::new(state.pool()).decrement_likes(id).await? {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("unliked message"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("message", id)),
    }
}

/// PUT /messages/{id}/invalidate
async fn invalidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match MessageRepo::new(state.pool()).invalidate(id).await? {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("invalidated message"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("message", id)),
    }
}
