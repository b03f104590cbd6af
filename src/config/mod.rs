use crate::core::aggregator::BoundaryPolicy;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// A constant column appended to every project row (e.g. `task_lev: 1.00`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraColumn {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_projects_file")]
    pub projects_file: String,
    #[serde(default = "default_calendar_file")]
    pub calendar_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_show_nickname")]
    pub show_nickname: bool,
    #[serde(default)]
    pub boundary: BoundaryPolicy,
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default)]
    pub extra_columns: Vec<ExtraColumn>,
}

/// Keys written by `init`; used by `config --check`.
pub const CONFIG_KEYS: [&str; 7] = [
    "projects_file",
    "calendar_file",
    "output_file",
    "show_nickname",
    "boundary",
    "clipboard_command",
    "extra_columns",
];

fn default_projects_file() -> String {
    Config::config_dir()
        .join("projects.csv")
        .to_string_lossy()
        .to_string()
}
fn default_calendar_file() -> String {
    Config::config_dir()
        .join("calendar.csv")
        .to_string_lossy()
        .to_string()
}
fn default_show_nickname() -> bool {
    true
}

fn default_output_file() -> String {
    "timesheets.xlsx".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_file: default_projects_file(),
            calendar_file: default_calendar_file(),
            output_file: default_output_file(),
            show_nickname: default_show_nickname(),
            boundary: BoundaryPolicy::default(),
            clipboard_command: None,
            extra_columns: Vec::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimesheet")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheet.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration as YAML, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Keys of [`CONFIG_KEYS`] not present in the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    pub fn projects_path(&self) -> PathBuf {
        expand_tilde(&self.projects_file)
    }

    pub fn calendar_path(&self) -> PathBuf {
        expand_tilde(&self.calendar_file)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_file)
    }
}
