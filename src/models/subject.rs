use serde::Serialize;

/// Result of splitting an appointment subject such as `ADMIN:999:standup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSubject {
    /// Upper-cased text before the first colon.
    pub project_nickname: String,
    /// Optional `<char><digits>` token between the first and second colon.
    pub task_number: Option<String>,
    pub description: String,
}
