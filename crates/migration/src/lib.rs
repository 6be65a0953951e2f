pub use sea_orm_migration::prelude::*;

mod m20241015_create_admission_tables;
mod m20241015_create_account_tables;
mod m20241016_add_admission_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241015_create_admission_tables::Migration),
            Box::new(m20241015_create_account_tables::Migration),
            Box::new(m20241016_add_admission_indexes::Migration),
        ]
    }
}
