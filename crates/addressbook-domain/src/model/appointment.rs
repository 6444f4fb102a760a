//! Appointment - A scheduled meeting with a contact

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use shared::ParseError;

static DESCRIPTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("appointment pattern is a valid regex")
});

/// Format users type dates in: `dd-MM-yyyy HH:mm`
pub const INPUT_DATE_TIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Format appointments are shown in: `01 Jan 2023 20:00`
pub const DISPLAY_DATE_TIME_FORMAT: &str = "%d %b %Y %H:%M";

/// Description plus date-time. The date-time is a real calendar instant by
/// construction; the description is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    description: String,
    date_time: NaiveDateTime,
}

impl Appointment {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Appointment descriptions should only contain \
        alphanumeric characters and spaces, and should not be blank";

    pub fn is_valid_description(value: &str) -> bool {
        DESCRIPTION_PATTERN.is_match(value)
    }

    pub fn new(description: &str, date_time: NaiveDateTime) -> Result<Self, ParseError> {
        if !Self::is_valid_description(description) {
            return Err(ParseError::new(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self {
            description: description.to_string(),
            date_time,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }
}

impl core::fmt::Display for Appointment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}, {}",
            self.description,
            self.date_time.format(DISPLAY_DATE_TIME_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_year_evening() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 1)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_appointment_creation() {
        let appt = Appointment::new("Review Insurance", new_year_evening()).unwrap();
        assert_eq!(appt.description(), "Review Insurance");
        assert_eq!(appt.date_time(), new_year_evening());
    }

    #[test]
    fn test_invalid_description() {
        assert!(Appointment::new("#Review Insurance*", new_year_evening()).is_err());
        assert!(Appointment::new("", new_year_evening()).is_err());
        assert!(Appointment::new(" Review", new_year_evening()).is_err());
    }

    #[test]
    fn test_display() {
        let appt = Appointment::new("Review Insurance", new_year_evening()).unwrap();
        assert_eq!(appt.to_string(), "Review Insurance, 01 Jan 2023 20:00");
    }

    #[test]
    fn test_value_object_equality() {
        let a = Appointment::new("Review Insurance", new_year_evening()).unwrap();
        let b = Appointment::new("Review Insurance", new_year_evening()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_serializes_camel_case() {
        let appt = Appointment::new("Review Insurance", new_year_evening()).unwrap();
        let json = serde_json::to_value(&appt).unwrap();
        assert_eq!(json["description"], "Review Insurance");
        assert_eq!(json["dateTime"], "2023-01-01T20:00:00");
    }
}
