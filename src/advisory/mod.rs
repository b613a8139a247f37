use crate::state::AppState;
use axum::{routing::post, Router};

mod client;
mod dto;
pub mod handlers;
mod prompts;

pub use client::{GeminiClient, GenerativeModel, ModelDisabled};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ai-coach/advice", post(handlers::coach_advice))
        .route(
            "/ai-coach/analyze-performance",
            post(handlers::analyze_performance),
        )
        .route("/ai-coach/training-plan", post(handlers::training_plan))
        .route("/nutrition/analyze", post(handlers::analyze_nutrition))
}
