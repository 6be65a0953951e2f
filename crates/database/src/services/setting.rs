use crate::{entities::settings, error::StoreResult};
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ConnectionTrait, EntityTrait,
    sea_query::OnConflict,
};

pub struct SettingService;

impl SettingService {
    const CALENDAR_ID: &'static str = "calendar_id";

    /// The calendar the events screen reads from and writes to
    pub async fn get_calendar_id<C>(db: &C) -> StoreResult<Option<String>>
    where
        C: ConnectionTrait,
    {
        Self::get(db, Self::CALENDAR_ID).await
    }

    pub async fn set_calendar_id<C>(db: &C, calendar_id: &str) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        Self::set(db, Self::CALENDAR_ID, calendar_id).await
    }

    async fn get<C>(db: &C, key: &str) -> StoreResult<Option<String>>
    where
        C: ConnectionTrait,
    {
        Ok(settings::Entity::find_by_id(key.to_string())
            .one(db)
            .await?
            .map(|s| s.value))
    }

    async fn set<C>(db: &C, key: &str, value: &str) -> StoreResult<()>
    where
        C: ConnectionTrait,
    {
        let row = settings::ActiveModel {
            key: Set(key.to_string()),
            value: Set(value.to_string()),
            updated_at: Set(Utc::now().naive_utc()),
        };

        settings::Entity::insert(row)
            .on_conflict(
                OnConflict::column(settings::Column::Key)
                    .update_columns([settings::Column::Value, settings::Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(db)
            .await?;

        Ok(())
    }
}
