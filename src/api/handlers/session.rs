/*
 * Responsibility
 * - POST /session (login) handler
 * - email でユーザを引き、digest 照合に通ったらトークンを発行する
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::dto::session::{LoginRequest, SessionResponse},
    error::AppError,
    services::password,
    state::AppState,
};

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    req.validate().map_err(AppError::validation)?;

    let user = state
        .users
        .find_by_email(&req.email)
        .ok_or_else(|| AppError::not_found("user"))?;

    if !password::matches(&req.password, &user.password_digest) {
        return Err(AppError::bad_request("LOGIN_FAILED", "wrong password"));
    }

    let access_token = state.auth.issue(user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse { access_token }),
    ))
}
