pub mod appointment;
pub mod project;
pub mod subject;
pub mod task_event;
pub mod week_report;
