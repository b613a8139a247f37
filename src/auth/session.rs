use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::ApiError;

pub const SESSION_USER_ID_KEY: &str = "user_id";

/// Resolves the caller's account id from the session cookie. Client-supplied
/// ids are never consulted here. Rejects with 401 when no session is bound.
pub struct CurrentUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Unauthenticated)?;

        let user_id = session
            .get::<i64>(SESSION_USER_ID_KEY)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?
            .ok_or(ApiError::Unauthenticated)?;

        Ok(CurrentUser(user_id))
    }
}
