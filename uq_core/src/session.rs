//! # Editing Session
//!
//! Everything the main window does that is not drawing: it owns the four
//! input panels and the current file, and turns File menu commands into
//! panel (de)serialization.
//!
//! Dialogs are reached through the [`FileHost`] trait. The GUI implements it
//! with native dialogs; tests script it.
//!
//! ## Example
//!
//! ```rust,no_run
//! use uq_core::session::Session;
//! use std::path::Path;
//!
//! let mut session = Session::new();
//! session.panels_mut().edps.add("Disp_1_1");
//! session.save_file(Path::new("workflow.json"))?;
//! assert_eq!(session.window_file_path(), "workflow.json");
//! # Ok::<(), uq_core::errors::UqError>(())
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::errors::UqResult;
use crate::file_io::{read_document, write_document};
use crate::panels::{PanelSet, RestoreScope};

/// Name shown for a document that has never been saved
pub const UNTITLED: &str = "untitled.json";

/// Title of every warning dialog
pub const WARNING_TITLE: &str = "Application";

/// Modal dialogs the session needs from its front end.
pub trait FileHost {
    /// Ask for a file to open; `None` when cancelled
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// Ask for a destination to save to; `None` when cancelled
    fn pick_save_path(&mut self) -> Option<PathBuf>;

    /// Show a blocking warning
    fn warn(&mut self, title: &str, message: &str);
}

/// File menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    New,
    Open,
    Save,
    SaveAs,
    Quit,
}

impl Command {
    /// Menu order
    pub const ALL: &'static [Command] = &[
        Command::New,
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As",
            Command::Quit => "Quit",
        }
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            Command::New => "Ctrl+N",
            Command::Open => "Ctrl+O",
            Command::Save => "Ctrl+S",
            Command::SaveAs => "Ctrl+Shift+S",
            Command::Quit => "Ctrl+Q",
        }
    }

    pub fn status_tip(&self) -> &'static str {
        match self {
            Command::New => "Create a new file",
            Command::Open => "Open an existing file",
            Command::Save => "Save the document to disk",
            Command::SaveAs => "Save the document with new filename to disk",
            Command::Quit => "Exit the application",
        }
    }
}

/// What a dispatched command ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command completed
    Done,
    /// The user dismissed a file dialog
    Cancelled,
    /// The command failed and a warning was shown
    Failed,
    /// The front end should exit
    Quit,
}

/// Details of a successful load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub path: PathBuf,
    /// Set when the content was not a JSON object and was read as empty
    pub parse_warning: Option<String>,
}

/// Main window state: the panels plus the current file.
#[derive(Debug, Clone)]
pub struct Session {
    panels: PanelSet,
    current_file: Option<PathBuf>,
    modified: bool,
    restore_scope: RestoreScope,
    last_load: Option<LoadReport>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

impl Session {
    /// Empty, untitled session that restores only the primary panels on load
    pub fn new() -> Self {
        Session::with_restore_scope(RestoreScope::Primary)
    }

    pub fn with_restore_scope(restore_scope: RestoreScope) -> Self {
        Session {
            panels: PanelSet::new(),
            current_file: None,
            modified: false,
            restore_scope,
            last_load: None,
        }
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    /// Mutable access to the panels.
    ///
    /// Marks the session as modified.
    pub fn panels_mut(&mut self) -> &mut PanelSet {
        self.modified = true;
        &mut self.panels
    }

    /// Apply a fallible panel edit.
    ///
    /// The session is marked modified only when the edit succeeds.
    pub fn edit<T>(&mut self, f: impl FnOnce(&mut PanelSet) -> UqResult<T>) -> UqResult<T> {
        let value = f(&mut self.panels)?;
        self.modified = true;
        Ok(value)
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// The current file for display, `untitled.json` when there is none
    pub fn window_file_path(&self) -> String {
        match &self.current_file {
            Some(path) => path.display().to_string(),
            None => UNTITLED.to_string(),
        }
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn restore_scope(&self) -> RestoreScope {
        self.restore_scope
    }

    /// Report from the most recent successful load
    pub fn last_load(&self) -> Option<&LoadReport> {
        self.last_load.as_ref()
    }

    fn set_current_file(&mut self, path: Option<PathBuf>) {
        self.current_file = path;
        self.modified = false;
    }

    /// Clear every panel and forget the current file
    pub fn new_file(&mut self) {
        self.panels.clear_all();
        self.last_load = None;
        self.set_current_file(None);
        info!("new document");
    }

    /// Serialize all panels to `path` and adopt it as the current file.
    ///
    /// On failure nothing about the session changes.
    pub fn save_file(&mut self, path: &Path) -> UqResult<()> {
        let doc = self.panels.to_document()?;
        write_document(&doc, path)?;
        self.set_current_file(Some(path.to_path_buf()));
        info!("saved {}", path.display());
        Ok(())
    }

    /// Read `path` into the panels selected by the restore scope.
    ///
    /// On failure nothing about the session changes.
    pub fn load_file(&mut self, path: &Path) -> UqResult<LoadReport> {
        let parsed = read_document(path)?;
        self.panels.restore_from(&parsed.document, self.restore_scope)?;

        let report = LoadReport {
            path: path.to_path_buf(),
            parse_warning: parsed.warning,
        };
        self.set_current_file(Some(path.to_path_buf()));
        self.last_load = Some(report.clone());
        info!("loaded {}", path.display());
        Ok(report)
    }

    /// Save to the current file, or ask for one if untitled
    pub fn save(&mut self, host: &mut impl FileHost) -> bool {
        self.run_save(host) == CommandOutcome::Done
    }

    /// Ask for a destination and save there
    pub fn save_as(&mut self, host: &mut impl FileHost) -> bool {
        self.run_save_as(host) == CommandOutcome::Done
    }

    /// Ask for a file and load it
    pub fn open(&mut self, host: &mut impl FileHost) -> bool {
        self.run_open(host) == CommandOutcome::Done
    }

    /// Run a File menu command
    pub fn dispatch(&mut self, command: Command, host: &mut impl FileHost) -> CommandOutcome {
        match command {
            Command::New => {
                self.new_file();
                CommandOutcome::Done
            }
            Command::Open => self.run_open(host),
            Command::Save => self.run_save(host),
            Command::SaveAs => self.run_save_as(host),
            Command::Quit => CommandOutcome::Quit,
        }
    }

    fn run_save(&mut self, host: &mut impl FileHost) -> CommandOutcome {
        match self.current_file.clone() {
            Some(path) => self.write_reporting(host, &path),
            None => self.run_save_as(host),
        }
    }

    fn run_save_as(&mut self, host: &mut impl FileHost) -> CommandOutcome {
        match host.pick_save_path() {
            Some(path) => self.write_reporting(host, &path),
            None => CommandOutcome::Cancelled,
        }
    }

    fn run_open(&mut self, host: &mut impl FileHost) -> CommandOutcome {
        let Some(path) = host.pick_open_path() else {
            return CommandOutcome::Cancelled;
        };
        match self.load_file(&path) {
            Ok(_) => CommandOutcome::Done,
            Err(e) => {
                warn!("load of {} failed: {}", path.display(), e);
                host.warn(
                    WARNING_TITLE,
                    &format!("Cannot read file {}:\n{}.", path.display(), e.reason()),
                );
                CommandOutcome::Failed
            }
        }
    }

    fn write_reporting(&mut self, host: &mut impl FileHost, path: &Path) -> CommandOutcome {
        match self.save_file(path) {
            Ok(()) => CommandOutcome::Done,
            Err(e) => {
                warn!("save to {} failed: {}", path.display(), e);
                host.warn(
                    WARNING_TITLE,
                    &format!("Cannot write file {}:\n{}.", path.display(), e.reason()),
                );
                CommandOutcome::Failed
            }
        }
    }
}
