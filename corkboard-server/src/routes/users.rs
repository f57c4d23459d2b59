//! User profile endpoints. Every field except the id is mutable via PUT.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use corkboard_store::{ExecOutcome, User, UserRepo};

use crate::envelope::{ok_empty, StructuredResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserProfileRequest {
    pub username: String,
    pub email: String,
    pub gender_identity: String,
    pub sexual_orientation: String,
    pub note: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list).post(create))
        .route("/users/{id}", get(get_one).put(update).delete(remove))
}

/// GET /users
async fn list(
    State(state): State<AppState>,
) -> Result<Json<StructuredResponse<Vec<User>>>, ApiError> {
    let rows = UserRepo::new(state.pool()).select_all().await?;
    Ok(Json(StructuredResponse::ok(rows)))
}

/// GET /users/{id}
async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<User>>, ApiError> {
    let row = UserRepo::new(state.pool())
        .select_one(id)
        .await?
        .ok_or_else(|| ApiError::not_found("user", id))?;
    Ok(Json(StructuredResponse::ok(row)))
}

/// POST /users - create a profile, answer with the assigned id.
async fn create(
    State(state): State<AppState>,
    Json(req): Json<UserProfileRequest>,
) -> Result<Json<StructuredResponse<i32>>, ApiError> {
    let id = UserRepo::new(state.pool())
        .insert(
            &req.username,
            &req.email,
            &req.gender_identity,
            &req.sexual_orientation,
            &req.note,
        )
        .await?;
    Ok(Json(StructuredResponse::ok(id)))
}

/// PUT /users/{id} - full-profile update.
async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<UserProfileRequest>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    match UserRepo::new(state.pool())
        .update(
            id,
            &req.username,
            &req.email,
            &req.gender_identity,
            &req.sexual_orientation,
            &req.note,
        )
        .await?
    {
        ExecOutcome::Updated(_) => Ok(Json(ok_empty("profile updated"))),
        ExecOutcome::NotFound => Err(ApiError::not_found("user", id)),
    }
}

/// DELETE /users/{id}
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StructuredResponse<()>>, ApiError> {
    UserRepo::new(state.pool()).delete(id).await?;
    Ok(Json(ok_empty("deleted")))
}
