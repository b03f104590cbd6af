use crate::utils::formatting::format_hours;
use chrono::NaiveDate;
use serde::Serialize;

pub const DAYS_IN_WEEK: usize = 7;

/// One project line of a weekly timesheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReportRow {
    pub project_nickname: String,
    /// Registry cells, nickname included at `WeekReport::nickname_column`.
    pub cells: Vec<String>,
    /// Hours per day, aligned with `WeekReport::days`.
    pub hours: [f64; DAYS_IN_WEEK],
}

/// Project × weekday matrix for one week.
///
/// Rows follow registry order and every known project has a row, even
/// when all of its cells are zero. Columns are the registry columns
/// followed by the seven days of the week, in date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekReport {
    pub year: i32,
    pub week: u32,
    pub days: [NaiveDate; DAYS_IN_WEEK],
    pub columns: Vec<String>,
    pub nickname_column: usize,
    pub rows: Vec<WeekReportRow>,
}

impl WeekReport {
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[DAYS_IN_WEEK - 1]
    }

    /// English weekday names (`Monday`, ...), one per column.
    pub fn day_labels(&self) -> Vec<String> {
        self.days
            .iter()
            .map(|d| d.format("%A").to_string())
            .collect()
    }

    pub fn row(&self, nickname: &str) -> Option<&WeekReportRow> {
        let key = nickname.to_uppercase();
        self.rows.iter().find(|r| r.project_nickname == key)
    }

    /// Hours booked on `nickname` for the given day, 0.0 when unknown.
    pub fn hours(&self, nickname: &str, day: NaiveDate) -> f64 {
        let Some(idx) = self.days.iter().position(|d| *d == day) else {
            return 0.0;
        };
        self.row(nickname).map(|r| r.hours[idx]).unwrap_or(0.0)
    }

    pub fn total_for_day(&self, day_index: usize) -> f64 {
        self.rows
            .iter()
            .fold(0.0, |acc, r| acc + r.hours[day_index])
    }

    pub fn total_for_project(&self, nickname: &str) -> f64 {
        self.row(nickname)
            .map(|r| r.hours.iter().fold(0.0, |acc, h| acc + h))
            .unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.rows
            .iter()
            .flat_map(|r| r.hours.iter())
            .fold(0.0, |acc, h| acc + h)
    }

    /// Column headers of [`WeekReport::to_matrix`].
    pub fn header(&self, show_nickname: bool) -> Vec<String> {
        let mut out = strip_nickname(&self.columns, self.nickname_column, show_nickname);
        out.extend(self.day_labels());
        out
    }

    /// The report as text cells, one inner vector per project.
    pub fn to_matrix(&self, show_nickname: bool) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                let mut line = strip_nickname(&r.cells, self.nickname_column, show_nickname);
                line.extend(r.hours.iter().map(|h| format_hours(*h)));
                line
            })
            .collect()
    }
}

fn strip_nickname(cells: &[String], position: usize, show_nickname: bool) -> Vec<String> {
    cells
        .iter()
        .enumerate()
        .filter(|(i, _)| show_nickname || *i != position)
        .map(|(_, c)| c.clone())
        .collect()
}
