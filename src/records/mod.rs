use crate::state::AppState;
use axum::{routing::get, Router};

mod dto;
pub mod handlers;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(handlers::my_metrics).post(handlers::create_metric))
        .route("/metrics/:user_id", get(handlers::metrics_for_user))
        .route(
            "/nutrition",
            get(handlers::my_nutrition).post(handlers::create_nutrition),
        )
        .route("/nutrition/:user_id", get(handlers::nutrition_for_user))
        .route(
            "/injuries",
            get(handlers::my_injuries).post(handlers::create_injury),
        )
        .route("/injuries/:user_id", get(handlers::injuries_for_user))
        .route(
            "/finances",
            get(handlers::my_finances).post(handlers::create_finance),
        )
        .route("/finances/:user_id", get(handlers::finances_for_user))
}
