use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

use crate::cli::parser::Commands;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", config_path.display());
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !config_path.exists() {
                warning(format!(
                    "No configuration file at {}, defaults are used",
                    config_path.display()
                ));
            } else {
                let missing = Config::missing_keys(config_path)?;
                if missing.is_empty() {
                    success("Configuration file is complete");
                } else {
                    warning(format!(
                        "Missing fields (defaults are used): {}",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(config_path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using '{}'",
                        editor_to_use
                    ));
                }
                Ok(_) | Err(_) if editor_to_use != default_editor => {
                    warning(format!(
                        "Editor '{}' not available, falling back to '{}'",
                        editor_to_use, default_editor
                    ));

                    let status = Command::new(&default_editor)
                        .arg(config_path)
                        .status()
                        .map_err(|e| AppError::Config(format!("{default_editor}: {e}")))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{}' exited with {}",
                            default_editor, status
                        )));
                    }
                }
                Ok(s) => {
                    return Err(AppError::Config(format!(
                        "editor '{}' exited with {}",
                        editor_to_use, s
                    )));
                }
                Err(e) => return Err(AppError::Config(format!("{editor_to_use}: {e}"))),
            }
        }
    }

    Ok(())
}
