use crate::cli::parser::Commands;
use crate::config::Config;
use crate::context::Context;
use crate::core::report;
use crate::errors::AppResult;
use crate::export::export_weeks_xlsx;
use crate::export::fs_utils::ensure_writable;
use crate::models::week_report::WeekReport;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        year,
        weeks,
        file,
        force,
    } = cmd
    {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => cfg.output_path(),
        };

        let ctx = Context::load(cfg.clone())?;
        let reports = build_reports(&ctx, *year, weeks)?;

        ensure_writable(&path, *force)?;
        export_weeks_xlsx(&reports, &path, cfg.show_nickname)?;
    }
    Ok(())
}

/// One report per distinct week, in the order first requested.
pub fn build_reports(ctx: &Context, year: i32, weeks: &[u32]) -> AppResult<Vec<WeekReport>> {
    let mut seen = Vec::with_capacity(weeks.len());
    for w in weeks {
        if !seen.contains(w) {
            seen.push(*w);
        }
    }

    seen.into_iter()
        .map(|w| report::week_report(ctx, year, w))
        .collect()
}
