use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer, Config};
use crate::handlers::health_check;
use crate::handlers::tickets::{
    activate_ticket, get_ticket, get_verification_history, verify_ticket,
};
use crate::handlers::verifications::{get_verification, list_verifications};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let api = Router::new()
        .route("/tickets/:ticket_id", get(get_ticket))
        .route("/tickets/:ticket_id/activate", put(activate_ticket))
        .route("/tickets/:ticket_id/verify", post(verify_ticket))
        .route(
            "/tickets/:ticket_id/verification-history",
            get(get_verification_history),
        )
        .route("/verifications", get(list_verifications))
        .route("/verifications/:verification_id", get(get_verification));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(config.production))
        .layer(create_cors_layer(&config.allowed_origins))
}
