/*
 * Responsibility
 * - POST /users (登録) handler
 * - digest 化した password だけを store に渡す
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::dto::users::{RegisterRequest, UserResponse},
    error::AppError,
    services::password,
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    req.validate().map_err(AppError::validation)?;

    let digest = password::digest(&req.password);
    let user = state.users.create(&req.email, &req.name, &digest)?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
            name: user.name,
        }),
    ))
}
