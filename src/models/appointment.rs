use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single calendar appointment instance, as returned by a calendar source.
///
/// Recurring appointments arrive already expanded: one value per occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub start: NaiveDateTime,
    /// Duration in minutes (may be fractional, never negative).
    pub duration: f64,
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl Appointment {
    pub fn new(start: NaiveDateTime, duration: f64, subject: &str, body: &str) -> Self {
        Self {
            start,
            duration,
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }
}
