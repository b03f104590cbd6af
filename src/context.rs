//! Run context: configuration, project registry and calendar, set up once
//! and then only read by the pipeline stages.

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::project::ProjectRegistry;
use crate::source::{CalendarSource, FileCalendar, load_registry};

pub struct Context {
    pub config: Config,
    pub registry: ProjectRegistry,
    pub calendar: Box<dyn CalendarSource>,
}

impl Context {
    pub fn new(config: Config, registry: ProjectRegistry, calendar: Box<dyn CalendarSource>) -> Self {
        Self {
            config,
            registry,
            calendar,
        }
    }

    /// Load the registry and open the calendar file named by `config`.
    /// A registry that cannot be loaded aborts the run.
    pub fn load(config: Config) -> AppResult<Self> {
        let registry = load_registry(&config.projects_path(), &config.extra_columns)?;
        let calendar = FileCalendar::new(config.calendar_path());
        Ok(Self::new(config, registry, Box::new(calendar)))
    }
}
