#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use models::admission::{AdmissionForm, RequirementForm};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// A freshly migrated in-memory database
pub async fn setup() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise get its own empty database
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub fn form(admission_no: &str) -> AdmissionForm {
    AdmissionForm {
        id: None,
        admission_no: admission_no.to_string(),
        first_name: "Ana".to_string(),
        middle_name: None,
        last_name: "Cruz".to_string(),
        email: "ana@x.com".to_string(),
        phone_number: "09171234567".to_string(),
        course: "College Of Computer Studies".to_string(),
        program: "Bachelor of Science in Information Technology".to_string(),
        requirements: vec![RequirementForm::new("Birth Certificate", true)],
    }
}

pub fn named(admission_no: &str, first_name: &str, last_name: &str) -> AdmissionForm {
    AdmissionForm {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..form(admission_no)
    }
}
