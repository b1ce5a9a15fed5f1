/*
 * Responsibility
 * - Bearer クレデンシャルの検証 (ヘッダ抽出 → 検証 → 拒否)
 * - handler は AuthCtx を引数に取るだけで認可ゲートが掛かる
 *
 * Notes
 * - extractor は handler 本体より先に走るため、認可に失敗した request は
 *   store に一切触れずに 401 で返る
 */
use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::error::AppError;
use crate::services::auth::Identity;
use crate::state::AppState;

/// Verified caller context for mutating routes.
///
/// Taking this as a handler argument is what gates the route; the identity
/// inside is available but nothing in this API reads it further.
#[derive(Debug, Clone)]
pub struct AuthCtx(pub Identity);

impl FromRequestParts<AppState> for AuthCtx {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let credential = match parts.headers.get(header::AUTHORIZATION) {
            // Present but undecodable bytes count as an invalid credential,
            // not a missing one.
            Some(value) => Some(value.to_str().map_err(|_| AppError::InvalidToken)?),
            None => None,
        };

        let identity = state.auth.authorize(credential).map_err(|err| {
            tracing::warn!(error = %err, "credential verification failed");
            AppError::from(err)
        })?;

        Ok(AuthCtx(identity))
    }
}
