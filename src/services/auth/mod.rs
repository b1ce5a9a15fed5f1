/*
 * Responsibility
 * - アクセストークンの発行と検証 (login / 認可ゲート)
 * - ヘッダ有無の判定はここで行い、handler には Identity だけを渡す
 */
pub mod jwt;

use thiserror::Error;

use crate::services::auth::jwt::{JwtCodec, JwtError};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization credential")]
    MissingCredential,
    #[error(transparent)]
    InvalidToken(#[from] JwtError),
    #[error("token signing failed")]
    Signing,
}

/// User identifier extracted from a verified credential.
///
/// Only ever used to gate access to mutating operations; nothing downstream
/// reads it back out of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
}

pub struct AuthenticationService {
    jwt: JwtCodec,
}

impl AuthenticationService {
    pub fn new(secret: &str, ttl_seconds: u64, leeway_seconds: u64) -> Self {
        Self {
            jwt: JwtCodec::new(secret, ttl_seconds, leeway_seconds),
        }
    }

    /// Issue an access token for a known user (login succeeded upstream).
    pub fn issue(&self, user_id: i64) -> Result<String, AuthError> {
        self.jwt.sign(user_id).map_err(|err| {
            tracing::error!(error = %err, "failed to sign access token");
            AuthError::Signing
        })
    }

    /// Gate keeper for mutating requests.
    ///
    /// - `None` (no `Authorization` header): `MissingCredential`
    /// - present but rejected by the verifier: `InvalidToken`
    /// - otherwise the embedded identity
    ///
    /// `Bearer ` が付いていても素のトークンでも受け付ける。
    pub fn authorize(&self, credential: Option<&str>) -> Result<Identity, AuthError> {
        let raw = credential.ok_or(AuthError::MissingCredential)?;
        let token = raw.strip_prefix("Bearer ").unwrap_or(raw).trim();

        if token.is_empty() {
            // A blank header value carries no credential at all.
            return Err(AuthError::MissingCredential);
        }

        let claims = self.jwt.verify(token)?;

        Ok(Identity {
            user_id: claims.user_id,
        })
    }
}
