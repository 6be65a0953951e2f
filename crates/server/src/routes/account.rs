use crate::{
    auth::CurrentAccount,
    dtos::account::{AccountQueryParams, AccountResponse},
    error::AppError,
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::{Query, State},
};
use database::services::account::AccountService;

/// List the staff accounts of an office
#[utoipa::path(
    get,
    path = "/admin/accounts",
    params(AccountQueryParams),
    responses(
        (status = 200, description = "Accounts retrieved successfully", body = Vec<AccountResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only admins may list another office"),
        (status = 500, description = "Internal server error")
    ),
    security(
        ("jwt" = [])
    ),
    tag = "Accounts"
)]
pub async fn get_office_accounts(
    State(state): State<AppState>,
    Extension(account): Extension<CurrentAccount>,
    Query(params): Query<AccountQueryParams>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let own_office = account.0.office;
    let office = params.office.unwrap_or(own_office);
    if office != own_office && !account.is_admin() {
        return Err(AppError::Forbidden("only admins may list another office"));
    }

    let accounts = AccountService::get_office_accounts(&state.db, office).await?;
    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}
