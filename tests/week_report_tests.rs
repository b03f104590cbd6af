mod common;
use common::{appt, registry, scenario_appointments};
use chrono::NaiveDate;
use rtimesheet::core::aggregator::BoundaryPolicy;
use rtimesheet::core::classifier::classify;
use rtimesheet::core::report::build_week_report;
use rtimesheet::core::week::{date_range_from_week, days_in_week, first_day_of_week, previous_week_of, week_of};
use rtimesheet::errors::AppError;
use rtimesheet::models::project::{ProjectEntry, ProjectRegistry};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_first_day_of_week_2020() {
    // 2020-01-01 is a Wednesday
    assert_eq!(first_day_of_week(2020, 1).unwrap(), day("2019-12-30"));
    assert_eq!(first_day_of_week(2020, 2).unwrap(), day("2020-01-06"));
    assert_eq!(first_day_of_week(2020, 10).unwrap(), day("2020-03-02"));
}

#[test]
fn test_first_day_when_year_starts_on_monday() {
    // 2024-01-01 is a Monday: weeks 1 and 2 start on the same day
    assert_eq!(first_day_of_week(2024, 1).unwrap(), day("2024-01-01"));
    assert_eq!(first_day_of_week(2024, 2).unwrap(), day("2024-01-01"));
    assert_eq!(first_day_of_week(2024, 3).unwrap(), day("2024-01-08"));
}

#[test]
fn test_first_day_when_year_starts_on_friday() {
    // 2021-01-01 is a Friday
    assert_eq!(first_day_of_week(2021, 1).unwrap(), day("2020-12-28"));
    assert_eq!(first_day_of_week(2021, 2).unwrap(), day("2021-01-04"));
}

#[test]
fn test_late_weeks_spill_into_next_year() {
    assert_eq!(first_day_of_week(2020, 54).unwrap(), day("2021-01-04"));
}

#[test]
fn test_invalid_week_numbers() {
    assert!(matches!(
        first_day_of_week(2020, 0),
        Err(AppError::InvalidWeek { year: 2020, week: 0 })
    ));
    assert!(matches!(
        first_day_of_week(2020, 55),
        Err(AppError::InvalidWeek { .. })
    ));
}

#[test]
fn test_week_range_and_days() {
    let (first, last) = date_range_from_week(2020, 2).unwrap();
    assert_eq!(first, day("2020-01-06"));
    assert_eq!(last, day("2020-01-12"));

    let days = days_in_week(first);
    assert_eq!(days[0], first);
    assert_eq!(days[6], last);
    assert!(days.windows(2).all(|w| w[1] == w[0].succ_opt().unwrap()));
}

#[test]
fn test_this_and_last_week_shortcuts() {
    assert_eq!(week_of(day("2020-01-08")), (2020, 2));
    assert_eq!(previous_week_of(day("2020-01-08")), (2020, 1));
    // week 1 rolls back into the previous ISO year
    assert_eq!(previous_week_of(day("2020-01-01")), (2019, 52));
}

#[test]
fn test_scenario_week_report() {
    let reg = registry();
    let events = classify(&scenario_appointments(), &reg);

    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    assert_eq!(report.first_day(), day("2020-01-06"));
    assert_eq!(report.hours("ADMIN", day("2020-01-06")), 0.5);
    assert_eq!(report.hours("ACME", day("2020-01-06")), 1.5);
    assert_eq!(report.hours("acme", day("2020-01-07")), 0.0);
    assert_eq!(report.total_for_day(0), 2.0);
    assert_eq!(report.grand_total(), 2.0);
    assert_eq!(
        report.day_labels(),
        vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
    );
}

#[test]
fn test_every_project_gets_a_zero_filled_row() {
    let reg = ProjectRegistry::from_nicknames(&["ADMIN", "ACME", "IDLE"]).unwrap();
    let events = classify(&scenario_appointments(), &reg);

    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    assert_eq!(report.rows.len(), 3);
    let nicknames: Vec<_> = report.rows.iter().map(|r| r.project_nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["ADMIN", "ACME", "IDLE"]);

    for row in &report.rows {
        for h in row.hours {
            assert!(h.is_finite() && h >= 0.0);
        }
    }
    assert_eq!(report.total_for_project("IDLE"), 0.0);

    // a week with no events at all is still fully populated
    let empty = build_week_report(2020, 30, &reg, &events, BoundaryPolicy::Inclusive).unwrap();
    assert_eq!(empty.rows.len(), 3);
    assert_eq!(empty.grand_total(), 0.0);
}

#[test]
fn test_report_is_deterministic() {
    let reg = registry();
    let events = classify(&scenario_appointments(), &reg);

    let a = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();
    let b = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_matrix(true), b.to_matrix(true));
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn test_sunday_midnight_policy() {
    let reg = registry();
    let events = classify(&[appt("2020-01-13 00:00", 60.0, "ADMIN:late")], &reg);

    let inclusive = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();
    assert_eq!(inclusive.hours("ADMIN", day("2020-01-12")), 1.0);

    let half_open = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::HalfOpen).unwrap();
    assert_eq!(half_open.grand_total(), 0.0);
}

#[test]
fn test_matrix_layout_and_nickname_column() {
    let reg = ProjectRegistry::new(
        vec!["wbs".into(), "description".into()],
        1,
        vec![
            ProjectEntry::new("ADMIN", vec!["W-1".into(), "Administration".into()]),
            ProjectEntry::new("ACME", vec!["W-2".into(), "Acme build".into()]),
        ],
    )
    .unwrap();
    let events = classify(&scenario_appointments(), &reg);
    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    let header = report.header(false);
    assert_eq!(&header[..3], &["wbs", "description", "Monday"]);
    assert_eq!(header.len(), 9);

    let header = report.header(true);
    assert_eq!(&header[..3], &["wbs", "project_nickname", "description"]);

    let matrix = report.to_matrix(false);
    assert_eq!(matrix[0][..4], ["W-1", "Administration", "0.5", "0.0"]);
    assert_eq!(matrix[1][2], "1.5");

    let matrix = report.to_matrix(true);
    assert_eq!(matrix[1][..3], ["W-2", "ACME", "Acme build"]);
    assert_eq!(matrix[1].len(), 10);
}

#[test]
fn test_empty_days_print_as_zero() {
    let reg = registry();
    let events = classify(&scenario_appointments(), &reg);
    let report = build_week_report(2020, 2, &reg, &events, BoundaryPolicy::Inclusive).unwrap();

    let tuesday = report.hours("ADMIN", day("2020-01-07"));
    assert!(tuesday.is_sign_positive());
    assert!(report.total_for_day(1).is_sign_positive());

    let empty = build_week_report(2020, 30, &reg, &[], BoundaryPolicy::Inclusive).unwrap();
    assert!(empty.grand_total().is_sign_positive());
    assert!(empty.total_for_project("ACME").is_sign_positive());

    for line in report.to_matrix(true) {
        assert!(line.iter().all(|cell| cell != "-0.0"));
    }
}
