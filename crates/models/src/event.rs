use crate::validation::{ValidationErrors, char_len};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Color ids understood by the calendar provider
pub const COLOR_IDS: std::ops::RangeInclusive<u8> = 1..=11;

fn default_time_zone() -> String {
    "UTC".to_string()
}

/// A point in time on a submitted event form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    pub date_time: DateTime<Utc>,
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

impl EventTime {
    pub fn utc(date_time: DateTime<Utc>) -> Self {
        Self {
            date_time,
            time_zone: default_time_zone(),
        }
    }
}

/// Event data posted by the events screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub color_id: String,
}

impl EventForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if char_len(&self.summary) < 2 {
            errors.push("summary", "Event summary is required");
        }
        if self.end.date_time <= self.start.date_time {
            errors.push("end", "End must be after start");
        }
        if self.color_id.is_empty() {
            errors.push("colorId", "Color is required");
        } else if !self
            .color_id
            .parse::<u8>()
            .is_ok_and(|id| COLOR_IDS.contains(&id))
        {
            errors.push("colorId", "Unknown color");
        }

        errors.into_result()
    }

    /// Location as the provider expects it; blank means none
    pub fn normalized_location(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.is_empty())
    }
}

/// Start or end of an event as reported by the calendar provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBoundary {
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// An event on the office calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub color_id: String,
    pub summary: String,
    pub location: Option<String>,
    pub start: EventBoundary,
    pub end: EventBoundary,
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::TimeZone;

    fn form() -> EventForm {
        EventForm {
            id: None,
            summary: "Orientation".to_string(),
            location: Some(String::new()),
            start: EventTime::utc(Utc.with_ymd_and_hms(2024, 8, 1, 9, 0, 0).unwrap()),
            end: EventTime::utc(Utc.with_ymd_and_hms(2024, 8, 1, 11, 0, 0).unwrap()),
            color_id: "3".to_string(),
        }
    }

    #[test]
    fn test_valid_event() {
        assert!(form().validate().is_ok());
        assert_eq!(form().normalized_location(), None);
    }

    #[test]
    fn test_end_before_start() {
        let mut event = form();
        std::mem::swap(&mut event.start, &mut event.end);

        let errors = event.validate().unwrap_err();
        assert_eq!(errors.message_for("end"), Some("End must be after start"));
    }

    #[test]
    fn test_color_bounds() {
        let mut event = form();
        event.color_id = "12".to_string();
        assert_eq!(
            event.validate().unwrap_err().message_for("colorId"),
            Some("Unknown color")
        );

        event.color_id = String::new();
        assert_eq!(
            event.validate().unwrap_err().message_for("colorId"),
            Some("Color is required")
        );
    }

    #[test]
    fn test_time_zone_defaults_to_utc() {
        let json = r#"{
            "summary": "Foundation Day",
            "start": { "dateTime": "2024-09-10T08:00:00+08:00" },
            "end": { "dateTime": "2024-09-10T17:00:00+08:00" },
            "colorId": "5"
        }"#;

        let event: EventForm = serde_json::from_str(json).unwrap();
        assert_eq!(event.start.time_zone, "UTC");
        assert_eq!(
            event.start.date_time,
            Utc.with_ymd_and_hms(2024, 9, 10, 0, 0, 0).unwrap()
        );
        assert!(event.validate().is_ok());
    }
}
