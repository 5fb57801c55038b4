use axum::Router;

pub mod insights;
pub mod system;

pub fn router() -> Router {
    Router::new().nest("/api/ai", insights::router())
}
