use crate::config::ExtraColumn;
use crate::errors::{AppError, AppResult};
use crate::models::project::{NICKNAME_COLUMN, ProjectEntry, ProjectRegistry};
use log::debug;
use std::path::Path;

/// Load the project registry from a CSV file with a header row.
///
/// The `project_nickname` column is mandatory; every other column is kept
/// as metadata, in file order, followed by `extra` constant columns.
pub fn load_registry(path: &Path, extra: &[ExtraColumn]) -> AppResult<ProjectRegistry> {
    if !path.exists() {
        return Err(AppError::RegistryLoad(format!(
            "projects file not found: {}",
            path.display()
        )));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| load_error(path, e))?;

    let headers = rdr.headers().map_err(|e| load_error(path, e))?.clone();

    let nickname_position = headers
        .iter()
        .position(|h| h == NICKNAME_COLUMN)
        .ok_or_else(|| {
            AppError::RegistryLoad(format!(
                "{}: missing required column '{NICKNAME_COLUMN}'",
                path.display()
            ))
        })?;

    let columns: Vec<String> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != nickname_position)
        .map(|(_, h)| h.to_string())
        .collect();

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| load_error(path, e))?;

        let nickname = record.get(nickname_position).unwrap_or_default();
        let metadata = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != nickname_position)
            .map(|(_, v)| v.to_string())
            .collect();

        entries.push(ProjectEntry::new(nickname, metadata));
    }

    let mut registry = ProjectRegistry::new(columns, nickname_position, entries)?;
    for col in extra {
        registry = registry.with_extra_column(&col.name, &col.value);
    }

    debug!(
        "loaded {} projects from {}",
        registry.len(),
        path.display()
    );
    Ok(registry)
}

fn load_error(path: &Path, e: csv::Error) -> AppError {
    AppError::RegistryLoad(format!("{}: {e}", path.display()))
}
