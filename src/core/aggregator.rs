use crate::models::project::{ProjectEntry, ProjectRegistry};
use crate::models::task_event::TaskEvent;
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// How the upper bound of a time window is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// `[start, end]`: an event starting exactly at midnight is counted in
    /// both adjacent day windows.
    #[default]
    Inclusive,
    /// `[start, end)`: every instant belongs to exactly one day window.
    HalfOpen,
}

impl BoundaryPolicy {
    pub fn contains(self, t: NaiveDateTime, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        match self {
            BoundaryPolicy::Inclusive => start <= t && t <= end,
            BoundaryPolicy::HalfOpen => start <= t && t < end,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Inclusive => "inclusive",
            BoundaryPolicy::HalfOpen => "half_open",
        }
    }
}

/// Hours booked on one project for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDayHours {
    pub project_nickname: String,
    pub date: NaiveDate,
    pub hours: f64,
}

/// Hours booked on one project over a span of days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectHours {
    pub project: ProjectEntry,
    pub hours: f64,
}

/// Sum the durations of `nickname`'s events starting inside the window,
/// converted to hours. Always a number, 0.0 when nothing matches.
pub fn hours_for_project_in_range(
    nickname: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    events: &[TaskEvent],
    policy: BoundaryPolicy,
) -> f64 {
    let minutes: f64 = events
        .iter()
        .filter(|e| e.project_nickname == nickname)
        .filter(|e| policy.contains(e.start, start, end))
        .map(|e| e.duration)
        .fold(0.0, |acc, d| acc + d);

    minutes / 60.0
}

/// Window covering a whole day: midnight to the next midnight.
pub fn day_window(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = date
        .checked_add_days(Days::new(1))
        .unwrap_or(date)
        .and_time(NaiveTime::MIN);
    (start, end)
}

pub fn project_day_hours(
    nickname: &str,
    date: NaiveDate,
    events: &[TaskEvent],
    policy: BoundaryPolicy,
) -> ProjectDayHours {
    let (start, end) = day_window(date);
    ProjectDayHours {
        project_nickname: nickname.to_string(),
        date,
        hours: hours_for_project_in_range(nickname, start, end, events, policy),
    }
}

/// Per-project totals from `from` to `to`, both dates included.
///
/// Every registry project is listed, in registry order.
pub fn hours_for_projects_in_range(
    registry: &ProjectRegistry,
    from: NaiveDate,
    to: NaiveDate,
    events: &[TaskEvent],
    policy: BoundaryPolicy,
) -> Vec<ProjectHours> {
    let start = from.and_time(NaiveTime::MIN);
    let (_, end) = day_window(to);

    registry
        .entries()
        .iter()
        .map(|p| ProjectHours {
            project: p.clone(),
            hours: hours_for_project_in_range(&p.nickname, start, end, events, policy),
        })
        .collect()
}
