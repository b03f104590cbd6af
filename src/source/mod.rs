//! External collaborators: where appointments and projects come from.

pub mod calendar;
pub mod registry;

pub use calendar::{CalendarSource, FileCalendar, MemoryCalendar};
pub use registry::load_registry;
