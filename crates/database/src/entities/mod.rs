pub mod accounts;
pub mod admissions;
pub mod requirements;
pub mod settings;
