//! Thin client for the Google Calendar v3 events API.
//!
//! A [`CalendarClient`] is built for one request from the caller's access
//! token and dropped afterwards; nothing is shared between users.

pub mod client;
pub mod error;
pub mod payload;

pub use client::CalendarClient;
pub use error::CalendarError;
