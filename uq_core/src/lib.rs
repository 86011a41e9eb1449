//! # uq_core - UQ Workflow Configuration Model
//!
//! `uq_core` holds everything about an uncertainty-quantification workflow
//! configuration that does not depend on a windowing toolkit: the input
//! panels, the JSON document they (de)serialize into, the editing session
//! behind the main window, and file I/O.
//!
//! ## Quick Start
//!
//! ```rust
//! use uq_core::panels::{Distribution, RandomVariable};
//! use uq_core::session::Session;
//!
//! let mut session = Session::new();
//! session.panels_mut().random_variables.add(RandomVariable::new(
//!     "fy",
//!     Distribution::Normal { mean: 60.0, std_dev: 6.0 },
//! ));
//!
//! let doc = session.panels().to_document().unwrap();
//! assert!(doc.contains_key("randomVariables"));
//! ```
//!
//! ## Modules
//!
//! - [`panels`] - Random variable, EDP, FEM and sampling method panels
//! - [`document`] - The merged JSON document
//! - [`session`] - Current file, New/Open/Save/Save As, command dispatch
//! - [`file_io`] - Atomic saves and lenient loads
//! - [`settings`] - User preferences (TOML)
//! - [`errors`] - Structured error types

pub mod document;
pub mod errors;
pub mod file_io;
pub mod panels;
pub mod session;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use document::Document;
pub use errors::{UqError, UqResult};
pub use panels::{Panel, PanelSet, RestoreScope};
pub use session::{Command, CommandOutcome, FileHost, Session};
pub use settings::Settings;
