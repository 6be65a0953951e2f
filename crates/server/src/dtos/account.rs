use chrono::NaiveDateTime;
use database::entities::accounts;
use models::account::{Office, Role};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[schema(value_type = String, example = "Staff")]
    pub role: Role,
    #[schema(value_type = String, example = "Osas")]
    pub office: Office,
    pub created_at: NaiveDateTime,
}

impl From<accounts::Model> for AccountResponse {
    fn from(account: accounts::Model) -> Self {
        AccountResponse {
            id: account.id,
            email: account.email,
            name: account.name,
            role: account.role,
            office: account.office,
            created_at: account.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct AccountQueryParams {
    /// Office to list; defaults to the caller's own office
    #[param(value_type = Option<String>)]
    pub office: Option<Office>,
}
