use crate::cli::parser::{Commands, OutputArgs};
use crate::config::Config;
use crate::context::Context;
use crate::core::report;
use crate::core::week;
use crate::errors::{AppError, AppResult};
use crate::export::{ClipboardSink, SystemClipboard, copy_report};
use crate::models::week_report::WeekReport;
use crate::ui::messages::{header, info, success};
use crate::utils::date;
use crate::utils::table::{Align, Column, Table};

/// Handle `week`, `this-week` and `last-week`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (year, week_number, output) = match cmd {
        Commands::Week {
            year,
            weeknumber,
            output,
        } => (*year, *weeknumber, output),
        Commands::ThisWeek { output } => {
            let (y, w) = week::week_of(date::today());
            (y, w, output)
        }
        Commands::LastWeek { output } => {
            let (y, w) = week::previous_week_of(date::today());
            (y, w, output)
        }
        _ => return Ok(()),
    };

    let ctx = Context::load(cfg.clone())?;
    let mut clipboard = SystemClipboard::new(cfg.clipboard_command.clone());
    run_week(&ctx, year, week_number, output, &mut clipboard)?;
    Ok(())
}

/// Build, print and copy one week report.
pub fn run_week(
    ctx: &Context,
    year: i32,
    week_number: u32,
    output: &OutputArgs,
    clipboard: &mut dyn ClipboardSink,
) -> AppResult<WeekReport> {
    if !output.json {
        info(format!(
            "Getting hours for week #{week_number} of {year} from the calendar."
        ));
    }

    let report = report::week_report(ctx, year, week_number)?;
    let show_nickname = ctx.config.show_nickname;

    if output.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
        println!("{json}");
    } else {
        header(format!(
            "Week {} / {} ({} → {})",
            report.week,
            report.year,
            report.first_day(),
            report.last_day()
        ));
        print!("{}", render_week(&report, show_nickname));
    }

    if !output.no_clipboard {
        copy_report(&report, show_nickname, clipboard)?;
        if !output.json {
            success("Week is now copied to your clipboard. Paste it into your timesheet.");
        }
    }

    Ok(report)
}

/// Text table: registry columns, then one column per day.
pub fn render_week(report: &WeekReport, show_nickname: bool) -> String {
    let headers = report.header(show_nickname);
    let first_day_col = headers.len() - report.days.len();

    let columns = headers
        .into_iter()
        .enumerate()
        .map(|(i, h)| Column {
            header: h,
            align: if i >= first_day_col {
                Align::Right
            } else {
                Align::Left
            },
        })
        .collect();

    let mut table = Table::new(columns);
    for row in report.to_matrix(show_nickname) {
        table.add_row(row);
    }
    table.render()
}
