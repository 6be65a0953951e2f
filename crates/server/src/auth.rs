use crate::{error::AppError, state::AppState};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use database::{entities::accounts, services::account::AccountService};
use log::warn;
use models::account::Role;
use serde::Deserialize;

/// Header carrying the provider access token used for calendar calls
pub const CALENDAR_TOKEN_HEADER: &str = "x-calendar-token";

/// Claims read from the validated bearer JWT
#[derive(Debug, Clone, Deserialize)]
pub struct AuthClaims {
    pub sub: Option<String>,
    pub email: Option<String>,
}

/// The registered staff account behind the current request
#[derive(Debug, Clone)]
pub struct CurrentAccount(pub accounts::Model);

impl CurrentAccount {
    pub fn require_admission_reviewer(&self) -> Result<(), AppError> {
        if self.0.office.reviews_admissions() {
            Ok(())
        } else {
            Err(AppError::Forbidden("office does not review admissions"))
        }
    }

    pub fn require_event_manager(&self) -> Result<(), AppError> {
        if self.0.office.manages_events() {
            Ok(())
        } else {
            Err(AppError::Forbidden("office does not manage events"))
        }
    }

    pub fn is_admin(&self) -> bool {
        self.0.role == Role::Admin
    }
}

/// Admits only identities that map to a registered account
pub async fn require_account(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let email = request
        .extensions()
        .get::<AuthClaims>()
        .and_then(|claims| claims.email.clone())
        .ok_or(AppError::Unauthorized)?;

    let account = AccountService::get_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| {
            warn!("Rejected sign-in for unregistered account {email}");
            AppError::Forbidden("account is not registered")
        })?;

    request.extensions_mut().insert(CurrentAccount(account));
    Ok(next.run(request).await)
}

/// The caller's calendar access token, if they sent one
pub fn calendar_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CALENDAR_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
