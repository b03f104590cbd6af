use crate::context::Context;
use crate::core::aggregator::{self, BoundaryPolicy, ProjectHours};
use crate::core::classifier::classify;
use crate::core::week;
use crate::errors::AppResult;
use crate::models::project::ProjectRegistry;
use crate::models::task_event::TaskEvent;
use crate::models::week_report::{DAYS_IN_WEEK, WeekReport, WeekReportRow};
use chrono::{Days, NaiveDate, NaiveTime};
use log::debug;

/// Assemble the project × weekday matrix for one week.
///
/// Pure: the same registry and events always give the same report.
pub fn build_week_report(
    year: i32,
    week_number: u32,
    registry: &ProjectRegistry,
    events: &[TaskEvent],
    policy: BoundaryPolicy,
) -> AppResult<WeekReport> {
    let first_day = week::first_day_of_week(year, week_number)?;
    let days = week::days_in_week(first_day);

    let rows = registry
        .entries()
        .iter()
        .map(|project| {
            let mut hours = [0.0; DAYS_IN_WEEK];
            for (cell, day) in hours.iter_mut().zip(days.iter()) {
                *cell = aggregator::project_day_hours(&project.nickname, *day, events, policy).hours;
            }
            WeekReportRow {
                project_nickname: project.nickname.clone(),
                cells: registry.cells(project, true),
                hours,
            }
        })
        .collect();

    Ok(WeekReport {
        year,
        week: week_number,
        days,
        columns: registry.header(true),
        nickname_column: registry.nickname_position(),
        rows,
    })
}

/// Fetch, classify and aggregate one week using the run context.
pub fn week_report(ctx: &Context, year: i32, week_number: u32) -> AppResult<WeekReport> {
    let (first, last) = week::date_range_from_week(year, week_number)?;
    let events = load_events(ctx, first, last)?;
    debug!(
        "week {week_number}/{year}: {} → {}, {} task events",
        first,
        last,
        events.len()
    );
    build_week_report(year, week_number, &ctx.registry, &events, ctx.config.boundary)
}

/// Per-project totals between two dates (both included).
pub fn range_report(ctx: &Context, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ProjectHours>> {
    let events = load_events(ctx, from, to)?;
    Ok(aggregator::hours_for_projects_in_range(
        &ctx.registry,
        from,
        to,
        &events,
        ctx.config.boundary,
    ))
}

/// Query the calendar for `[first 00:00, last + 1 day 00:00]` and classify.
fn load_events(ctx: &Context, first: NaiveDate, last: NaiveDate) -> AppResult<Vec<TaskEvent>> {
    let from = first.and_time(NaiveTime::MIN);
    let to = last
        .checked_add_days(Days::new(1))
        .unwrap_or(last)
        .and_time(NaiveTime::MIN);

    let appointments = ctx.calendar.appointments(from, to)?;
    Ok(classify(&appointments, &ctx.registry))
}
