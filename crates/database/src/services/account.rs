use crate::{entities::accounts, error::StoreResult};
use chrono::Utc;
use models::account::{Office, Role};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

pub struct AccountService;

impl AccountService {
    /// All staff accounts registered to an office, by name
    pub async fn get_office_accounts<C>(db: &C, office: Office) -> StoreResult<Vec<accounts::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(accounts::Entity::find()
            .filter(accounts::Column::Office.eq(office))
            .order_by_asc(accounts::Column::Name)
            .all(db)
            .await?)
    }

    /// The account a signed-in identity maps to, if it is registered
    pub async fn get_by_email<C>(db: &C, email: &str) -> StoreResult<Option<accounts::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(accounts::Entity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(db)
            .await?)
    }

    pub async fn create<C>(
        db: &C,
        email: &str,
        name: &str,
        role: Role,
        office: Office,
    ) -> StoreResult<accounts::Model>
    where
        C: ConnectionTrait,
    {
        let account = accounts::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            name: Set(name.to_string()),
            role: Set(role),
            office: Set(office),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?;

        Ok(account)
    }
}
