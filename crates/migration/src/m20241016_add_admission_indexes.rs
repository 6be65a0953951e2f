use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Not unique: an intake number may be shared by several admissions
        manager
            .create_index(
                Index::create()
                    .name("idx_admissions_admission_no")
                    .table(Admissions::Table)
                    .col(Admissions::AdmissionNo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admissions_status")
                    .table(Admissions::Table)
                    .col(Admissions::Status)
                    .to_owned(),
            )
            .await?;

        // Index on requirements.admission_id for faster joins
        manager
            .create_index(
                Index::create()
                    .name("idx_requirements_admission_id")
                    .table(Requirements::Table)
                    .col(Requirements::AdmissionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_accounts_office")
                    .table(Accounts::Table)
                    .col(Accounts::Office)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_admissions_admission_no").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_admissions_status").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_requirements_admission_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_accounts_office").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Admissions {
    Table,
    AdmissionNo,
    Status,
}

#[derive(Iden)]
enum Requirements {
    Table,
    AdmissionId,
}

#[derive(Iden)]
enum Accounts {
    Table,
    Office,
}
