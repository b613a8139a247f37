use axum::{extract::State, http::StatusCode, Json};
use tower_sessions::Session;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
        session::{CurrentUser, SESSION_USER_ID_KEY},
    },
    error::ApiError,
    state::AppState,
    store::Account,
};

async fn bind_session(session: &Session, user_id: i64) -> Result<(), ApiError> {
    session
        .insert(SESSION_USER_ID_KEY, user_id)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))
}

#[instrument(skip(state, session, payload))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let (username, password, mut profile) = payload.validate()?;

    if state
        .store
        .get_account_by_username(&username)
        .await?
        .is_some()
    {
        warn!(username = %username, "registration failed, username exists");
        return Err(ApiError::DuplicateUsername);
    }

    profile.password_hash = hash_password(&password)?;
    let account = state.store.create_account(profile).await?;

    bind_session(&session, account.id).await?;
    info!(user_id = %account.id, username = %account.username, "user registered");
    Ok((StatusCode::CREATED, Json(account)))
}

#[instrument(skip(state, session, payload))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<Account>, ApiError> {
    // Unknown user and bad password must be indistinguishable on the wire;
    // only the server-side log records which factor failed.
    let account = match state.store.get_account_by_username(&payload.username).await? {
        Some(a) => a,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &account.password_hash) {
        warn!(username = %payload.username, user_id = %account.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    bind_session(&session, account.id).await?;
    info!(user_id = %account.id, username = %account.username, "user logged in");
    Ok(Json(account))
}

#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode, ApiError> {
    // Idempotent: flushing an empty session is not an error.
    session
        .flush()
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;
    info!("user logged out");
    Ok(StatusCode::OK)
}

#[instrument(skip(state))]
pub async fn current_user(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .store
        .get_account(user_id)
        .await?
        .ok_or(ApiError::Unauthenticated)?;
    Ok(Json(account))
}
