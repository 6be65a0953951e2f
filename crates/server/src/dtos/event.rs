use chrono::{DateTime, Utc};
use models::event::{CalendarEvent, EventBoundary, EventForm, EventTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeRequest {
    pub date_time: DateTime<Utc>,
    pub time_zone: Option<String>,
}

impl From<EventTimeRequest> for EventTime {
    fn from(request: EventTimeRequest) -> Self {
        EventTime {
            date_time: request.date_time,
            time_zone: request.time_zone.unwrap_or_else(|| "UTC".to_string()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub summary: String,
    pub location: Option<String>,
    pub start: EventTimeRequest,
    pub end: EventTimeRequest,
    pub color_id: String,
}

impl EventRequest {
    pub fn into_form(self, id: Option<String>) -> EventForm {
        EventForm {
            id,
            summary: self.summary,
            location: self.location,
            start: self.start.into(),
            end: self.end.into(),
            color_id: self.color_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTimeResponse {
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
}

impl From<EventBoundary> for EventTimeResponse {
    fn from(boundary: EventBoundary) -> Self {
        EventTimeResponse {
            date_time: boundary.date_time,
            time_zone: boundary.time_zone,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    pub id: String,
    pub color_id: String,
    pub summary: String,
    pub location: Option<String>,
    pub start: EventTimeResponse,
    pub end: EventTimeResponse,
}

impl From<CalendarEvent> for EventResponse {
    fn from(event: CalendarEvent) -> Self {
        EventResponse {
            id: event.id,
            color_id: event.color_id,
            summary: event.summary,
            location: event.location,
            start: event.start.into(),
            end: event.end.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSetting {
    pub calendar_id: Option<String>,
}
