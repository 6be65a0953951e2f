use crate::{
    error::CalendarError,
    payload::{ApiErrorBody, EventPayload, RawEvent, RawEventList},
};
use chrono::Utc;
use log::{debug, error};
use models::event::{CalendarEvent, EventForm};
use reqwest::{Client, RequestBuilder, Response, Url};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3/";

/// Calendar API client bound to one user's access token
pub struct CalendarClient {
    http: Client,
    base_url: Url,
    access_token: String,
}

impl CalendarClient {
    /// Number of upcoming events shown on the events screen
    pub const UPCOMING_LIMIT: u32 = 10;

    pub fn new(access_token: impl Into<String>) -> Result<Self, CalendarError> {
        let base_url =
            Url::parse(DEFAULT_BASE_URL).map_err(|e| CalendarError::Url(e.to_string()))?;
        Self::with_base_url(access_token, base_url)
    }

    /// Points the client at another API root
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: Url,
    ) -> Result<Self, CalendarError> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(CalendarError::MissingAccessToken);
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            access_token,
        })
    }

    /// The next events on the calendar, soonest first
    pub async fn list_upcoming(
        &self,
        calendar_id: &str,
    ) -> Result<Vec<CalendarEvent>, CalendarError> {
        let url = self.events_url(calendar_id, None)?;
        let time_min = Utc::now().to_rfc3339();
        let max_results = Self::UPCOMING_LIMIT.to_string();

        let request = self.http.get(url).query(&[
            ("timeMin", time_min.as_str()),
            ("maxResults", max_results.as_str()),
            ("singleEvents", "true"),
            ("orderBy", "startTime"),
        ]);
        let list: RawEventList = self.send(request).await?.json().await?;

        debug!("Fetched {} events from {calendar_id}", list.items.len());
        Ok(list.items.into_iter().map(CalendarEvent::from).collect())
    }

    pub async fn get(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> Result<CalendarEvent, CalendarError> {
        let url = self.events_url(calendar_id, Some(event_id))?;
        let raw: RawEvent = self.send(self.http.get(url)).await?.json().await?;
        Ok(raw.into())
    }

    pub async fn insert(
        &self,
        calendar_id: &str,
        form: &EventForm,
    ) -> Result<CalendarEvent, CalendarError> {
        let url = self.events_url(calendar_id, None)?;
        let request = self.http.post(url).json(&EventPayload::from(form));
        let raw: RawEvent = self.send(request).await?.json().await?;
        Ok(raw.into())
    }

    pub async fn update(
        &self,
        calendar_id: &str,
        event_id: &str,
        form: &EventForm,
    ) -> Result<CalendarEvent, CalendarError> {
        let url = self.events_url(calendar_id, Some(event_id))?;
        let request = self.http.put(url).json(&EventPayload::from(form));
        let raw: RawEvent = self.send(request).await?.json().await?;
        Ok(raw.into())
    }

    pub async fn delete(&self, calendar_id: &str, event_id: &str) -> Result<(), CalendarError> {
        let url = self.events_url(calendar_id, Some(event_id))?;
        self.send(self.http.delete(url)).await?;
        Ok(())
    }

    /// Builds `calendars/{calendar_id}/events[/{event_id}]`, escaping each segment
    fn events_url(&self, calendar_id: &str, event_id: Option<&str>) -> Result<Url, CalendarError> {
        if calendar_id.trim().is_empty() {
            return Err(CalendarError::MissingCalendarId);
        }

        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| CalendarError::Url(self.base_url.to_string()))?;
            segments.pop_if_empty();
            segments.extend(["calendars", calendar_id, "events"]);
            if let Some(event_id) = event_id {
                segments.push(event_id);
            }
        }

        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, CalendarError> {
        let response = request.bearer_auth(&self.access_token).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);
        error!("Calendar API returned {status}: {message}");

        Err(CalendarError::Api { status, message })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_requires_token() {
        assert!(matches!(
            CalendarClient::new("  "),
            Err(CalendarError::MissingAccessToken)
        ));
    }

    #[test]
    fn test_events_url_escapes_calendar_id() {
        let client = CalendarClient::new("token").unwrap();

        let url = client
            .events_url("office#events@group.calendar.google.com", None)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/calendar/v3/calendars/office%23events@group.calendar.google.com/events"
        );

        let url = client.events_url("primary", Some("evt 1")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/calendar/v3/calendars/primary/events/evt%201"
        );
    }

    #[test]
    fn test_events_url_requires_calendar() {
        let client = CalendarClient::new("token").unwrap();
        assert!(matches!(
            client.events_url("", None),
            Err(CalendarError::MissingCalendarId)
        ));
    }

    #[tokio::test]
    async fn test_unreachable_api_is_an_error() {
        let base = Url::parse("http://127.0.0.1:9/").unwrap();
        let client = CalendarClient::with_base_url("token", base).unwrap();

        let err = client.list_upcoming("primary").await.unwrap_err();
        assert!(matches!(err, CalendarError::Http(_)));
    }
}
