use models::event::{CalendarEvent, EventBoundary, EventForm};
use serde::{Deserialize, Serialize};

/// Event resource as sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: PayloadTime,
    pub end: PayloadTime,
    pub color_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadTime {
    pub date_time: String,
    pub time_zone: String,
}

impl From<&EventForm> for EventPayload {
    fn from(form: &EventForm) -> Self {
        // Times always go out as UTC
        Self {
            summary: form.summary.clone(),
            location: form.normalized_location().map(str::to_string),
            start: PayloadTime {
                date_time: form.start.date_time.to_rfc3339(),
                time_zone: "UTC".to_string(),
            },
            end: PayloadTime {
                date_time: form.end.date_time.to_rfc3339(),
                time_zone: "UTC".to_string(),
            },
            color_id: form.color_id.clone(),
        }
    }
}

/// Event resource as returned by the provider; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    pub id: Option<String>,
    pub color_id: Option<String>,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub start: Option<RawEventTime>,
    pub end: Option<RawEventTime>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEventTime {
    pub date_time: Option<String>,
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEventList {
    #[serde(default)]
    pub items: Vec<RawEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorDetail {
    pub message: String,
}

impl From<RawEventTime> for EventBoundary {
    fn from(raw: RawEventTime) -> Self {
        Self {
            date_time: raw.date_time,
            time_zone: raw.time_zone,
        }
    }
}

impl From<RawEvent> for CalendarEvent {
    fn from(raw: RawEvent) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            color_id: raw.color_id.unwrap_or_else(|| "1".to_string()),
            summary: raw.summary.unwrap_or_else(|| "No Title".to_string()),
            location: raw.location,
            start: raw.start.map(Into::into).unwrap_or_default(),
            end: raw.end.map(Into::into).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{TimeZone, Utc};
    use models::event::EventTime;

    #[test]
    fn test_missing_fields_get_defaults() {
        let raw: RawEvent = serde_json::from_str(r#"{ "id": "abc" }"#).unwrap();
        let event = CalendarEvent::from(raw);

        assert_eq!(event.id, "abc");
        assert_eq!(event.color_id, "1");
        assert_eq!(event.summary, "No Title");
        assert_eq!(event.location, None);
        assert_eq!(event.start.date_time, None);
    }

    #[test]
    fn test_list_without_items() {
        let list: RawEventList = serde_json::from_str(r#"{ "kind": "calendar#events" }"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_payload_from_form() {
        let form = EventForm {
            id: None,
            summary: "Enrollment".to_string(),
            location: Some(String::new()),
            start: EventTime::utc(Utc.with_ymd_and_hms(2024, 6, 3, 1, 0, 0).unwrap()),
            end: EventTime::utc(Utc.with_ymd_and_hms(2024, 6, 3, 9, 0, 0).unwrap()),
            color_id: "7".to_string(),
        };

        let json = serde_json::to_value(EventPayload::from(&form)).unwrap();
        assert_eq!(json["summary"], "Enrollment");
        assert_eq!(json["colorId"], "7");
        assert_eq!(json["start"]["dateTime"], "2024-06-03T01:00:00+00:00");
        assert_eq!(json["start"]["timeZone"], "UTC");
        assert!(json.get("location").is_none());
    }
}
