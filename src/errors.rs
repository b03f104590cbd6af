//! Unified application error type.
//! Every module (sources, core, export, cli) returns AppError so a run
//! either completes or stops with one readable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // External sources
    // ---------------------------
    #[error("Cannot load project registry: {0}")]
    RegistryLoad(String),

    #[error("Calendar source error: {0}")]
    CalendarSource(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid week number {week} for year {year} (expected 1..=54)")]
    InvalidWeek { year: i32, week: u32 },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
