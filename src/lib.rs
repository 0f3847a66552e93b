// StudyPal - turn uploaded notes into summaries, quizzes and flashcards

pub mod config;
pub mod types;
pub mod models;
pub mod extract;
pub mod store;
pub mod prompt;
pub mod llm;
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use store::DocumentStore;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
