// src/export/mod.rs

pub mod clipboard;
pub(crate) mod fs_utils;
pub mod xlsx;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard, clipboard_text, copy_report};
pub use xlsx::export_weeks_xlsx;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
