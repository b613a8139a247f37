//! Record-kind endpoints. Each kind is reachable three ways: a
//! path-parameterized read with no ownership check (admin/debug surface,
//! kept as-is from the original access policy), a session-scoped "mine"
//! read, and an unauthenticated create that validates the payload and
//! requires the owner id to name an existing account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::{
    auth::CurrentUser,
    error::ApiError,
    state::AppState,
    store::{FinanceRecord, InjuryRecord, NutritionRecord, PerformanceRecord},
};

use super::dto::{NewFinance, NewInjury, NewMetric, NewNutrition};

async fn ensure_owner_exists(state: &AppState, owner: i64) -> Result<(), ApiError> {
    if state.store.get_account(owner).await?.is_none() {
        return Err(ApiError::Validation(vec!["userId"]));
    }
    Ok(())
}

// --- performance metrics ---

#[instrument(skip(state))]
pub async fn metrics_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<PerformanceRecord>>, ApiError> {
    Ok(Json(state.store.metrics_for(user_id).await?))
}

#[instrument(skip(state))]
pub async fn my_metrics(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<PerformanceRecord>>, ApiError> {
    Ok(Json(state.store.metrics_for(user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_metric(
    State(state): State<AppState>,
    Json(payload): Json<NewMetric>,
) -> Result<(StatusCode, Json<PerformanceRecord>), ApiError> {
    let draft = payload.validate()?;
    ensure_owner_exists(&state, draft.user_id).await?;
    let record = state.store.append_metric(draft).await?;
    info!(record_id = %record.id, user_id = %record.user_id, "metric recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

// --- nutrition logs ---

#[instrument(skip(state))]
pub async fn nutrition_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<NutritionRecord>>, ApiError> {
    Ok(Json(state.store.nutrition_for(user_id).await?))
}

#[instrument(skip(state))]
pub async fn my_nutrition(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<NutritionRecord>>, ApiError> {
    Ok(Json(state.store.nutrition_for(user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_nutrition(
    State(state): State<AppState>,
    Json(payload): Json<NewNutrition>,
) -> Result<(StatusCode, Json<NutritionRecord>), ApiError> {
    let draft = payload.validate()?;
    ensure_owner_exists(&state, draft.user_id).await?;
    let record = state.store.append_nutrition(draft).await?;
    info!(record_id = %record.id, user_id = %record.user_id, "nutrition logged");
    Ok((StatusCode::CREATED, Json(record)))
}

// --- injuries ---

#[instrument(skip(state))]
pub async fn injuries_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<InjuryRecord>>, ApiError> {
    Ok(Json(state.store.injuries_for(user_id).await?))
}

#[instrument(skip(state))]
pub async fn my_injuries(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<InjuryRecord>>, ApiError> {
    Ok(Json(state.store.injuries_for(user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_injury(
    State(state): State<AppState>,
    Json(payload): Json<NewInjury>,
) -> Result<(StatusCode, Json<InjuryRecord>), ApiError> {
    let draft = payload.validate()?;
    ensure_owner_exists(&state, draft.user_id).await?;
    let record = state.store.append_injury(draft).await?;
    info!(record_id = %record.id, user_id = %record.user_id, "injury recorded");
    Ok((StatusCode::CREATED, Json(record)))
}

// --- finances ---

#[instrument(skip(state))]
pub async fn finances_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<FinanceRecord>>, ApiError> {
    Ok(Json(state.store.finances_for(user_id).await?))
}

#[instrument(skip(state))]
pub async fn my_finances(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<FinanceRecord>>, ApiError> {
    Ok(Json(state.store.finances_for(user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_finance(
    State(state): State<AppState>,
    Json(payload): Json<NewFinance>,
) -> Result<(StatusCode, Json<FinanceRecord>), ApiError> {
    let draft = payload.validate()?;
    ensure_owner_exists(&state, draft.user_id).await?;
    let record = state.store.append_finance(draft).await?;
    info!(record_id = %record.id, user_id = %record.user_id, "finance entry recorded");
    Ok((StatusCode::CREATED, Json(record)))
}
