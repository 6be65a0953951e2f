use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Admissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admissions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admissions::AdmissionNo).string().not_null())
                    .col(ColumnDef::new(Admissions::FirstName).string().not_null())
                    .col(ColumnDef::new(Admissions::MiddleName).string())
                    .col(ColumnDef::new(Admissions::LastName).string().not_null())
                    .col(ColumnDef::new(Admissions::Email).string().not_null())
                    .col(ColumnDef::new(Admissions::PhoneNumber).string().not_null())
                    .col(ColumnDef::new(Admissions::Course).string().not_null())
                    .col(ColumnDef::new(Admissions::Program).string().not_null())
                    .col(
                        ColumnDef::new(Admissions::Status)
                            .string_len(16)
                            .not_null()
                            .default("Pending"),
                    )
                    .col(ColumnDef::new(Admissions::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Admissions::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Requirements go away with their admission
        manager
            .create_table(
                Table::create()
                    .table(Requirements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Requirements::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Requirements::AdmissionId).uuid().not_null())
                    .col(ColumnDef::new(Requirements::Name).string().not_null())
                    .col(
                        ColumnDef::new(Requirements::IsSubmitted)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-requirements-admission_id")
                            .from(Requirements::Table, Requirements::AdmissionId)
                            .to(Admissions::Table, Admissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Requirements::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Admissions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Admissions {
    Table,
    Id,
    AdmissionNo,
    FirstName,
    MiddleName,
    LastName,
    Email,
    PhoneNumber,
    Course,
    Program,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Requirements {
    Table,
    Id,
    AdmissionId,
    Name,
    IsSubmitted,
}
