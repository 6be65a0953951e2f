use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "requirements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub admission_id: Uuid,
    pub name: String,
    pub is_submitted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::admissions::Entity",
        from = "Column::AdmissionId",
        to = "super::admissions::Column::Id",
        on_delete = "Cascade"
    )]
    Admission,
}

impl Related<super::admissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Admission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
