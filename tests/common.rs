#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rtimesheet::models::appointment::Appointment;
use rtimesheet::models::project::ProjectRegistry;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const PROJECTS_CSV: &str = "project_nickname,description\nADMIN,Administration\nACME,Acme build\n";

pub const CALENDAR_CSV: &str = "start,duration,subject,body
2020-01-06 10:00:00,90,ACME:build,
2020-01-06 09:00:00,30,admin:5:standup,daily
2020-01-06 11:00:00,15,no colon here,
2020-01-08 14:00:00,60,OTHER:1:not ours,
2020-01-09 08:30:00,45,Acme:A12:review,
";

pub fn rts() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Unique path inside the system temp dir; any previous file is removed
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Write `content` to a fresh temp file and return its path as String
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write temp file");
    path.to_string_lossy().to_string()
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid test timestamp")
}

pub fn appt(start: &str, minutes: f64, subject: &str) -> Appointment {
    Appointment::new(dt(start), minutes, subject, "")
}

pub fn registry() -> ProjectRegistry {
    ProjectRegistry::from_nicknames(&["ADMIN", "ACME"]).expect("valid registry")
}

/// The appointments of the reference scenario (Monday 2020-01-06)
pub fn scenario_appointments() -> Vec<Appointment> {
    vec![
        appt("2020-01-06 09:00", 30.0, "admin:5:standup"),
        appt("2020-01-06 10:00", 90.0, "ACME:build"),
        appt("2020-01-06 11:00", 15.0, "no colon here"),
    ]
}
