//! Advisory endpoints: build a prompt, make a single model call (no retry,
//! no timeout), parse the reply as the fixed JSON shape, relay it. Model
//! failures and unparseable replies surface as 500 with the cause; nothing
//! is written to the record store on these paths.

use axum::{extract::State, Json};
use serde::de::DeserializeOwned;
use tracing::{error, instrument};

use crate::{error::ApiError, state::AppState};

use super::dto::{
    AdviceRequest, CoachAdvice, NutritionAnalysisRequest, NutritionEstimate, PerformanceAnalysis,
    PerformanceAnalysisRequest, RawNutritionEstimate, TrainingPlan, TrainingPlanRequest,
};
use super::prompts;

async fn ask<T: DeserializeOwned>(state: &AppState, prompt: &str) -> Result<T, ApiError> {
    let reply = state.model.generate(prompt).await.map_err(|e| {
        error!(error = %e, "model call failed");
        ApiError::Advisory(e)
    })?;

    serde_json::from_str::<T>(&reply).map_err(|e| {
        error!(error = %e, "model reply did not match the expected shape");
        ApiError::Advisory(anyhow::anyhow!("unparseable model reply: {e}"))
    })
}

#[instrument(skip(state, payload))]
pub async fn coach_advice(
    State(state): State<AppState>,
    Json(payload): Json<AdviceRequest>,
) -> Result<Json<CoachAdvice>, ApiError> {
    let prompt = prompts::coach_advice(&payload.question, payload.context.as_ref());
    Ok(Json(ask(&state, &prompt).await?))
}

#[instrument(skip(state, payload))]
pub async fn analyze_performance(
    State(state): State<AppState>,
    Json(payload): Json<PerformanceAnalysisRequest>,
) -> Result<Json<PerformanceAnalysis>, ApiError> {
    let prompt = prompts::performance_analysis(&payload.metrics, &payload.goals);
    Ok(Json(ask(&state, &prompt).await?))
}

#[instrument(skip(state, payload))]
pub async fn training_plan(
    State(state): State<AppState>,
    Json(payload): Json<TrainingPlanRequest>,
) -> Result<Json<TrainingPlan>, ApiError> {
    let prompt = prompts::training_plan(&payload.level, &payload.goals, &payload.constraints);
    Ok(Json(ask(&state, &prompt).await?))
}

#[instrument(skip(state, payload))]
pub async fn analyze_nutrition(
    State(state): State<AppState>,
    Json(payload): Json<NutritionAnalysisRequest>,
) -> Result<Json<NutritionEstimate>, ApiError> {
    // Rejected before any model call.
    let food_items = match payload.food_items.as_deref().map(str::trim) {
        Some(items) if !items.is_empty() => items.to_string(),
        _ => return Err(ApiError::Validation(vec!["foodItems"])),
    };

    let prompt = prompts::nutrition_analysis(&food_items);
    let raw: RawNutritionEstimate = ask(&state, &prompt).await?;
    Ok(Json(raw.into()))
}
