use crate::{auth::require_account, state::AppState};
use axum::{
    Router, middleware,
    routing::{delete, get, patch},
};

pub mod account;
pub mod admission;
pub mod auth;
pub mod department;
pub mod event;
pub mod health;
pub mod root;

#[cfg(test)]
mod tests;

/// Applicant-facing routes; no sign-in required
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route("/health", get(health::health))
        .route("/departments", get(department::get_departments))
        .route("/requirements", get(department::get_default_requirements))
        .route(
            "/admissions",
            get(admission::get_admissions_by_number).post(admission::submit_admission),
        )
        .route(
            "/admissions/{id}",
            get(admission::get_admission_by_id).put(admission::save_admission),
        )
}

/// Staff routes, nested under `/admin`.
///
/// Expects validated JWT claims in the request extensions; the caller adds
/// the layer that puts them there.
pub fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/admissions", get(admission::list_admissions))
        .route("/admissions/{id}", delete(admission::delete_admission))
        .route(
            "/admissions/{id}/status",
            patch(admission::set_admission_status),
        )
        .route("/accounts", get(account::get_office_accounts))
        .route(
            "/calendar",
            get(event::get_calendar).put(event::set_calendar),
        )
        .route("/events", get(event::get_events).post(event::create_event))
        .route(
            "/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_account))
}
