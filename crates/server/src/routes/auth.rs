use crate::{auth::CurrentAccount, dtos::account::AccountResponse};
use axum::{Extension, Json};

/// Returns the staff account behind the caller's JWT
#[utoipa::path(
    get,
    path = "/admin/me",
    responses(
        (status = 200, description = "Signed in as a registered account", body = AccountResponse),
        (status = 401, description = "Unauthorized - invalid or missing JWT"),
        (status = 403, description = "Forbidden - the identity has no registered account")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Authentication"
)]
pub async fn me(Extension(account): Extension<CurrentAccount>) -> Json<AccountResponse> {
    Json(account.0.into())
}
