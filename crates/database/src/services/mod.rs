pub mod account;
pub mod admission;
pub mod setting;
pub mod workflow;
