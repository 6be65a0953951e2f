use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Calendar ID is required.")]
    MissingCalendarId,
    #[error("Access token is required.")]
    MissingAccessToken,
    #[error("invalid calendar url: {0}")]
    Url(String),
    #[error("calendar request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("calendar API returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

impl CalendarError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
