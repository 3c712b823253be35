pub mod chat;
pub mod health;
pub mod jobs;
pub mod payments;
pub mod search;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Assistant backend
        .route("/api/chat", post(chat::handle_chat))
        .route(
            "/api/search",
            post(search::handle_search).get(search::handle_search_usage),
        )
        .route("/api/job/:url", get(jobs::handle_job_detail))
        // Jobs backend
        .route(
            "/api/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route(
            "/api/jobs/:id",
            get(jobs::handle_get_job)
                .put(jobs::handle_update_job)
                .delete(jobs::handle_delete_job),
        )
        .route(
            "/api/jobs/:id/save",
            post(jobs::handle_save_job).delete(jobs::handle_unsave_job),
        )
        // Payments
        .route("/api/payments", post(payments::handle_create_checkout))
        .route("/api/payments/config", get(payments::handle_payment_config))
        // Liveness
        .route(
            "/api/health",
            get(health::handle_health).head(health::handle_health_head),
        )
        .fallback(not_found)
        .with_state(state)
}
