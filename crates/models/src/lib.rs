pub mod account;
pub mod admission;
pub mod department;
pub mod event;
pub mod status;
pub mod validation;
