use super::project::ProjectEntry;
use chrono::NaiveDateTime;
use serde::Serialize;

/// An appointment that matched a known project.
///
/// `project.nickname` always equals `project_nickname` and is always a
/// member of the registry the event was classified against.
#[derive(Debug, Clone, Serialize)]
pub struct TaskEvent {
    pub start: NaiveDateTime,
    pub duration: f64,   // minutes
    pub description: String,
    pub body: String,
    pub project_nickname: String,
    pub task_number: Option<String>,
    pub project: ProjectEntry,
}

impl TaskEvent {
    pub fn hours(&self) -> f64 {
        self.duration / 60.0
    }
}
