// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{any, get},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{question, user},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the legacy registration path and the question sub-router.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (Database Pool).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let question_routes = Router::new()
        .route(
            "/",
            get(question::list_questions).post(question::create_question),
        )
        .route("/{id}", get(question::get_question));

    Router::new()
        // The original servlet handled every verb through its generic
        // `service` method, so the legacy path is registered for any method.
        .route("/InsereUsuarioServlet", any(user::insert_user))
        .nest("/api/questions", question_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
