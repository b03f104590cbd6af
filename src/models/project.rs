use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::collections::HashMap;

/// Name of the column every registry source must provide.
pub const NICKNAME_COLUMN: &str = "project_nickname";

/// One known project: its upper-cased nickname plus every other registry
/// column, carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    pub nickname: String,
    /// Values aligned with [`ProjectRegistry::columns`].
    pub metadata: Vec<String>,
}

impl ProjectEntry {
    pub fn new(nickname: &str, metadata: Vec<String>) -> Self {
        Self {
            nickname: nickname.trim().to_uppercase(),
            metadata,
        }
    }
}

/// Read-only table of known projects, kept in source order.
#[derive(Debug, Clone)]
pub struct ProjectRegistry {
    columns: Vec<String>,
    nickname_position: usize,
    entries: Vec<ProjectEntry>,
    index: HashMap<String, usize>,
}

impl ProjectRegistry {
    /// Build a registry.
    ///
    /// - `columns`: metadata headers (nickname excluded), in source order
    /// - `nickname_position`: where the nickname column sat in the source,
    ///   used to put it back when the nickname is shown
    /// - `entries`: one per project; every `metadata` must match `columns`
    pub fn new(
        columns: Vec<String>,
        nickname_position: usize,
        entries: Vec<ProjectEntry>,
    ) -> AppResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            if entry.nickname.is_empty() {
                return Err(AppError::RegistryLoad(format!(
                    "empty {NICKNAME_COLUMN} in row {}",
                    i + 1
                )));
            }
            if entry.metadata.len() != columns.len() {
                return Err(AppError::RegistryLoad(format!(
                    "project '{}' has {} values, expected {}",
                    entry.nickname,
                    entry.metadata.len(),
                    columns.len()
                )));
            }
            if index.insert(entry.nickname.clone(), i).is_some() {
                return Err(AppError::RegistryLoad(format!(
                    "duplicate project nickname '{}'",
                    entry.nickname
                )));
            }
        }

        Ok(Self {
            columns,
            nickname_position,
            entries,
            index,
        })
    }

    /// Registry without metadata columns, handy for tests and quick setups.
    pub fn from_nicknames(nicknames: &[&str]) -> AppResult<Self> {
        let entries = nicknames
            .iter()
            .map(|n| ProjectEntry::new(n, Vec::new()))
            .collect();
        Self::new(Vec::new(), 0, entries)
    }

    /// Append a constant-valued column to every project.
    pub fn with_extra_column(mut self, name: &str, value: &str) -> Self {
        self.columns.push(name.to_string());
        for entry in &mut self.entries {
            entry.metadata.push(value.to_string());
        }
        self
    }

    /// Membership test; `nickname` is matched case-insensitively.
    pub fn contains(&self, nickname: &str) -> bool {
        self.index.contains_key(&nickname.to_uppercase())
    }

    pub fn lookup(&self, nickname: &str) -> Option<&ProjectEntry> {
        self.index
            .get(&nickname.to_uppercase())
            .map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[ProjectEntry] {
        &self.entries
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the nickname column once it is put back among the others.
    pub fn nickname_position(&self) -> usize {
        self.nickname_position.min(self.columns.len())
    }

    /// Header cells describing a project, optionally with the nickname
    /// column put back at its source position.
    pub fn header(&self, show_nickname: bool) -> Vec<String> {
        let mut out = self.columns.clone();
        if show_nickname {
            out.insert(self.nickname_position(), NICKNAME_COLUMN.to_string());
        }
        out
    }

    /// Cells of one project matching [`ProjectRegistry::header`].
    pub fn cells(&self, entry: &ProjectEntry, show_nickname: bool) -> Vec<String> {
        let mut out = entry.metadata.clone();
        if show_nickname {
            out.insert(self.nickname_position(), entry.nickname.clone());
        }
        out
    }
}
