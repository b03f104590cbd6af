// src/export/clipboard.rs

use crate::errors::{AppError, AppResult};
use crate::models::week_report::WeekReport;
use log::debug;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Text accepted by spreadsheet paste: cells separated by `\t`, rows by
/// `\r\n`, newlines inside a row removed.
pub fn clipboard_text<S: AsRef<str>>(matrix: &[Vec<S>]) -> String {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|c| c.as_ref())
                .collect::<Vec<_>>()
                .join("\t")
                .replace('\n', "")
        })
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Where clipboard text ends up.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> AppResult<()>;
}

/// Desktop clipboard, reached through the platform's command-line tool.
pub struct SystemClipboard {
    command: Option<String>,
}

impl SystemClipboard {
    /// `command` overrides the platform default, e.g. `xclip -selection clipboard`.
    pub fn new(command: Option<String>) -> Self {
        Self { command }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        if let Some(cmd) = &self.command {
            return vec![cmd.split_whitespace().map(String::from).collect()];
        }

        let defaults: &[&[&str]] = if cfg!(target_os = "windows") {
            &[&["clip"]]
        } else if cfg!(target_os = "macos") {
            &[&["pbcopy"]]
        } else {
            &[
                &["wl-copy"],
                &["xclip", "-selection", "clipboard"],
                &["xsel", "--clipboard", "--input"],
            ]
        };

        defaults
            .iter()
            .map(|c| c.iter().map(|s| s.to_string()).collect())
            .collect()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()> {
        let candidates = self.candidates();
        let mut tried = Vec::new();

        for argv in candidates {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };

            match pipe_into(program, args, text) {
                Ok(()) => {
                    debug!("clipboard set with '{}'", program);
                    return Ok(());
                }
                Err(e) => {
                    debug!("clipboard tool '{}' failed: {}", program, e);
                    tried.push(format!("{program} ({e})"));
                }
            }
        }

        Err(AppError::Export(format!(
            "could not set clipboard, tried: {}",
            tried.join(", ")
        )))
    }
}

/// Spawn `program`, write `text` to its stdin, close it and wait.
fn pipe_into(program: &str, args: &[String], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // stdin is dropped (closed) before waiting, otherwise the tool never exits
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    let status = child.wait()?;
    written?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("exited with {status}")))
    }
}

/// Keeps the last text in memory. Useful when no desktop session exists.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> AppResult<()> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

/// Copy the report rows (no header) and return the text that was copied.
pub fn copy_report(
    report: &WeekReport,
    show_nickname: bool,
    sink: &mut dyn ClipboardSink,
) -> AppResult<String> {
    let text = clipboard_text(&report.to_matrix(show_nickname));
    sink.set_text(&text)?;
    Ok(text)
}
