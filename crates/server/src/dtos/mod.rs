pub mod account;
pub mod admission;
pub mod event;
