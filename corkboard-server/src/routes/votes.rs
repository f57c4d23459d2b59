//! Vote record endpoints.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use corkboard_store::{ExecOutcome, Vote, VoteRepo};

use crate::envelope::{ok_empty, StructuredResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct VoteRequest {
    pub email: String,
    pub upvote: i32,
    pub downvote: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/votes", get(list).post(create))
        .route("/votes/{id}", get(get_one).put(update).delete(remove))
}

/// GET /votes
async fn list(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<Vote>>>, ApiError> {
    let rows = VoteRepo::new(state.pool()).select_all().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /votes/{id}
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<Vote>>, ApiError> {
    let row = VoteRepo::new(state.pool())
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("vote", id))?;
    Ok(Json(StructuredResponse::ok(row)))
}

/// POST /votes - record a vote, answer with the assigned id.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<StructuredResponse<i32>>, ApiError> {
    let id = VoteRepo::new(state.pool())
        .insert(&req.email, req.upvote, req.downvote)
        .await?;
    Ok(Json(StructuredResponse::ok(id)))
}

/// PUT /votes/{id}
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<VoteRequest>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match VoteRepo::new(state.pool())
        .update(id, &req.email, req.upvote, req.downvote)
        .await?
    {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("vote updated"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("vote", id)),
    }
}

/// DELETE /votes/{id}
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    VoteRepo::new(state.pool()).delete(id).await?;
    Ok(Json(ok_empty("deleted")))
}
