use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Anything able to list appointment instances by start time.
pub trait CalendarSource {
    /// Appointments starting within `[from, to]`, sorted by start.
    /// Recurring appointments are returned once per occurrence.
    fn appointments(&self, from: NaiveDateTime, to: NaiveDateTime) -> AppResult<Vec<Appointment>>;
}

/// Calendar export on disk: CSV with a `start,duration,subject,body`
/// header, or a JSON array of objects with the same fields.
pub struct FileCalendar {
    path: PathBuf,
}

impl FileCalendar {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> AppResult<Vec<Appointment>> {
        if !self.path.exists() {
            return Err(AppError::CalendarSource(format!(
                "calendar file not found: {}",
                self.path.display()
            )));
        }

        let raw = if is_json(&self.path) {
            read_json(&self.path)?
        } else {
            read_csv(&self.path)?
        };

        raw.into_iter()
            .enumerate()
            .map(|(i, r)| r.into_appointment(i + 1))
            .collect()
    }
}

impl CalendarSource for FileCalendar {
    fn appointments(&self, from: NaiveDateTime, to: NaiveDateTime) -> AppResult<Vec<Appointment>> {
        Ok(select(self.read_all()?, from, to))
    }
}

/// Calendar held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCalendar {
    appointments: Vec<Appointment>,
}

impl MemoryCalendar {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self { appointments }
    }
}

impl CalendarSource for MemoryCalendar {
    fn appointments(&self, from: NaiveDateTime, to: NaiveDateTime) -> AppResult<Vec<Appointment>> {
        Ok(select(self.appointments.clone(), from, to))
    }
}

fn select(mut all: Vec<Appointment>, from: NaiveDateTime, to: NaiveDateTime) -> Vec<Appointment> {
    all.retain(|a| from <= a.start && a.start <= to);
    all.sort_by_key(|a| a.start);
    all
}

/// One record as found in the file, before validation.
#[derive(Debug, Deserialize)]
struct RawAppointment {
    start: String,
    duration: f64,
    subject: String,
    #[serde(default)]
    body: String,
}

const START_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

impl RawAppointment {
    fn into_appointment(self, record: usize) -> AppResult<Appointment> {
        let start = parse_start(&self.start).ok_or_else(|| {
            AppError::CalendarSource(format!(
                "record {record}: invalid start '{}'",
                self.start
            ))
        })?;

        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AppError::CalendarSource(format!(
                "record {record}: invalid duration {}",
                self.duration
            )));
        }

        Ok(Appointment {
            start,
            duration: self.duration,
            subject: self.subject,
            body: self.body,
        })
    }
}

/// Parse a start timestamp; anything after the seconds (fractions,
/// timezone offsets) is ignored.
pub(crate) fn parse_start(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    let head = s.get(..19).unwrap_or(s);

    START_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(head, fmt).ok())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn read_json(path: &Path) -> AppResult<Vec<RawAppointment>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::CalendarSource(format!("{}: {e}", path.display())))
}

fn read_csv(path: &Path) -> AppResult<Vec<RawAppointment>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| AppError::CalendarSource(format!("{}: {e}", path.display())))?;

    let mut out = Vec::new();
    for r in rdr.deserialize() {
        let rec: RawAppointment =
            r.map_err(|e| AppError::CalendarSource(format!("{}: {e}", path.display())))?;
        out.push(rec);
    }
    Ok(out)
}
