use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;

const PROJECTS_TEMPLATE: &str = "project_nickname,description\nADMIN,Administration\n";

/// Handle the `init` command
///
/// This writes:
///  - the configuration file (kept unless `--force`)
///  - a template project registry, if none exists yet
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        if config_path.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                config_path.display()
            ));
        } else {
            cfg.save(config_path)?;
            success(format!("Config file : {}", config_path.display()));
        }

        let projects = cfg.projects_path();
        if projects.exists() {
            info(format!("Projects    : {}", projects.display()));
        } else {
            if let Some(dir) = projects.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)?;
            }
            fs::write(&projects, PROJECTS_TEMPLATE)?;
            success(format!("Projects    : {} (template)", projects.display()));
        }

        info(format!("Calendar    : {}", cfg.calendar_path().display()));
    }
    Ok(())
}
