mod common;
use common::{registry, scenario_appointments, temp_path};
use rtimesheet::config::Config;
use rtimesheet::context::Context;
use rtimesheet::core::aggregator::BoundaryPolicy;
use rtimesheet::core::classifier::classify;
use rtimesheet::core::report::{build_week_report, week_report};
use rtimesheet::errors::{AppError, AppResult};
use rtimesheet::export::{
    ClipboardSink, MemoryClipboard, clipboard_text, copy_report, export_weeks_xlsx,
};
use rtimesheet::source::MemoryCalendar;
use std::fs;

struct BrokenClipboard;

impl ClipboardSink for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> AppResult<()> {
        Err(AppError::Export("clipboard is locked".into()))
    }
}

#[test]
fn test_clipboard_text_format() {
    let matrix = vec![vec!["A", "1"], vec!["B", "2"]];
    assert_eq!(clipboard_text(&matrix), "A\t1\r\nB\t2");
}

#[test]
fn test_clipboard_text_strips_newlines_in_cells() {
    let matrix = vec![vec!["multi\nline".to_string(), "3".to_string()]];
    assert_eq!(clipboard_text(&matrix), "multiline\t3");

    let empty: Vec<Vec<String>> = Vec::new();
    assert_eq!(clipboard_text(&empty), "");
}

#[test]
fn test_copy_report_sends_rows_without_header_row() {
    let reg = registry();
    let events = classify(&scenario_appointments(), &reg);
    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    let mut clip = MemoryClipboard::default();
    let text = copy_report(&report, false, &mut clip).unwrap();

    assert_eq!(clip.text.as_deref(), Some(text.as_str()));
    assert_eq!(
        text,
        "0.5\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0\r\n1.5\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0"
    );

    let default_layout = copy_report(&report, Config::default().show_nickname, &mut clip).unwrap();
    assert_eq!(
        default_layout,
        "ADMIN\t0.5\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0\r\nACME\t1.5\t0.0\t0.0\t0.0\t0.0\t0.0\t0.0"
    );
}

#[test]
fn test_clipboard_failure_keeps_report() {
    let reg = registry();
    let events = classify(&scenario_appointments(), &reg);
    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    let err = copy_report(&report, false, &mut BrokenClipboard).unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
    assert_eq!(report.hours("ACME", report.first_day()), 1.5);
}

#[test]
fn test_week_report_through_context() {
    let ctx = Context::new(
        Config::default(),
        registry(),
        Box::new(MemoryCalendar::new(scenario_appointments())),
    );

    let report = week_report(&ctx, 2020, 2).unwrap();
    assert_eq!(report.total_for_project("ADMIN"), 0.5);
    assert_eq!(report.total_for_project("ACME"), 1.5);

    assert!(matches!(
        week_report(&ctx, 2020, 0),
        Err(AppError::InvalidWeek { .. })
    ));
}

#[test]
fn test_export_weeks_xlsx_writes_workbook() {
    let ctx = Context::new(
        Config::default(),
        registry(),
        Box::new(MemoryCalendar::new(scenario_appointments())),
    );
    let reports = vec![
        week_report(&ctx, 2020, 1).unwrap(),
        week_report(&ctx, 2020, 2).unwrap(),
    ];

    let out = temp_path("export_weeks", "xlsx");
    export_weeks_xlsx(&reports, &out, false).unwrap();

    let bytes = fs::read(&out).expect("read workbook");
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}
