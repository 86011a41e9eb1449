//! Native dialogs via `rfd`.
//!
//! Dialogs are modal and block the update loop until dismissed.

use std::path::{Path, PathBuf};

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use uq_core::session::{FileHost, UNTITLED};

/// [`FileHost`] backed by the platform's file and message dialogs
pub struct NativeHost {
    start_dir: Option<PathBuf>,
}

impl NativeHost {
    /// Dialogs open in the current file's directory, else `fallback_dir`
    pub fn new(current_file: Option<&Path>, fallback_dir: Option<&Path>) -> Self {
        let start_dir = current_file
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .or(fallback_dir)
            .map(Path::to_path_buf);
        NativeHost { start_dir }
    }

    fn config_dialog(&self) -> FileDialog {
        let dialog = FileDialog::new().add_filter("Workflow configuration", &["json"]);
        match &self.start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    /// Pick any file, e.g. a model input or post-processing script
    pub fn pick_any_file(&self, title: &str) -> Option<PathBuf> {
        let dialog = FileDialog::new().set_title(title);
        let dialog = match &self.start_dir {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        };
        dialog.pick_file()
    }
}

impl FileHost for NativeHost {
    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.config_dialog().pick_file()
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        self.config_dialog().set_file_name(UNTITLED).save_file()
    }

    fn warn(&mut self, title: &str, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
