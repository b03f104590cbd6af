use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::Context;
use crate::core::aggregator::ProjectHours;
use crate::core::report;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::parse_date;
use crate::utils::formatting::{format_hours, hours2readable};
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range { from, to } = cmd {
        let from = parse_date(from)?;
        let to = parse_date(to)?;
        if to < from {
            return Err(AppError::InvalidDate(format!(
                "range end {to} is before start {from}"
            )));
        }

        let ctx = Context::load(cfg.clone())?;
        let totals = report::range_report(&ctx, from, to)?;

        header(format!("Hours spent from {from} to {to} by project"));
        print!("{}", render_totals(&totals));
    }
    Ok(())
}

fn render_totals(totals: &[ProjectHours]) -> String {
    let mut table = Table::new(vec![
        Column {
            header: "project_nickname".into(),
            align: Align::Left,
        },
        Column {
            header: "hours".into(),
            align: Align::Right,
        },
        Column {
            header: "time".into(),
            align: Align::Right,
        },
    ]);

    for t in totals {
        table.add_row(vec![
            t.project.nickname.clone(),
            format_hours(t.hours),
            hours2readable(t.hours),
        ]);
    }

    let total = totals.iter().fold(0.0, |acc, t| acc + t.hours);
    table.add_row(vec![
        "TOTAL".into(),
        format_hours(total),
        hours2readable(total),
    ]);

    table.render()
}
