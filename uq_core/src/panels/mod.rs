//! # Input Panels
//!
//! Each panel owns one slice of the workflow configuration and one
//! top-level key of the [`Document`]. The main window never looks inside a
//! panel's section; it only asks panels to clear, write or read themselves.
//!
//! - [`random_variables`] - Named random variables and their distributions
//! - [`edp`] - Engineering demand parameters reported by the model
//! - [`fem`] - Finite-element program and its input files
//! - [`sampling`] - Sampling method, sample count and seed

pub mod edp;
pub mod fem;
pub mod random_variables;
pub mod sampling;

use log::debug;

use crate::document::Document;
use crate::errors::{UqError, UqResult};

pub use edp::{Edp, EdpPanel};
pub use fem::{FemPanel, FemProgram};
pub use random_variables::{Distribution, DistributionKind, RandomVariable, RandomVariablePanel};
pub use sampling::{SamplingMethod, SamplingPanel};

/// Contract every input panel implements.
pub trait Panel {
    /// Top-level document key this panel owns
    fn key(&self) -> &'static str;

    /// Heading shown above the panel
    fn title(&self) -> &'static str;

    /// Reset to the cleared/default state
    fn clear(&mut self);

    /// Write this panel's section into `doc`
    fn output_to_json(&self, doc: &mut Document) -> UqResult<()>;

    /// Replace this panel's state from `doc`.
    ///
    /// A missing section clears the panel. A malformed section is an error
    /// and leaves the panel untouched.
    fn input_from_json(&mut self, doc: &Document) -> UqResult<()>;

    /// All problems with the current state; empty when valid
    fn validate(&self) -> Vec<UqError>;
}

/// Which panels a load restores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreScope {
    /// Random variables and EDPs only
    Primary,
    /// Every panel
    All,
}

/// The four input panels, in layout order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSet {
    pub random_variables: RandomVariablePanel,
    pub fem: FemPanel,
    pub edps: EdpPanel,
    pub sampling: SamplingPanel,
}

impl PanelSet {
    pub fn new() -> Self {
        PanelSet::default()
    }

    pub fn clear_all(&mut self) {
        self.random_variables.clear();
        self.edps.clear();
        self.fem.clear();
        self.sampling.clear();
    }

    /// Serialize every panel into one document.
    ///
    /// Order: random variables, EDPs, FEM, sampling method.
    pub fn to_document(&self) -> UqResult<Document> {
        let mut doc = Document::new();
        self.random_variables.output_to_json(&mut doc)?;
        self.edps.output_to_json(&mut doc)?;
        self.fem.output_to_json(&mut doc)?;
        self.sampling.output_to_json(&mut doc)?;
        Ok(doc)
    }

    /// Restore panels from `doc`.
    ///
    /// All-or-nothing: if any selected panel rejects its section, no panel
    /// changes.
    pub fn restore_from(&mut self, doc: &Document, scope: RestoreScope) -> UqResult<()> {
        let mut staged = self.clone();
        staged.random_variables.input_from_json(doc)?;
        staged.edps.input_from_json(doc)?;
        if scope == RestoreScope::All {
            staged.fem.input_from_json(doc)?;
            staged.sampling.input_from_json(doc)?;
        }
        debug!(
            "restored {} random variable(s), {} EDP(s) ({:?})",
            staged.random_variables.len(),
            staged.edps.len(),
            scope
        );
        *self = staged;
        Ok(())
    }

    /// Validation problems keyed by panel title
    pub fn validate_all(&self) -> Vec<(&'static str, UqError)> {
        let panels: [&dyn Panel; 4] = [
            &self.random_variables,
            &self.edps,
            &self.fem,
            &self.sampling,
        ];
        panels
            .iter()
            .flat_map(|panel| {
                let title = panel.title();
                panel.validate().into_iter().map(move |e| (title, e))
            })
            .collect()
    }
}

/// Names that are blank or repeated, reported against `field`.
pub(crate) fn check_names<'a>(
    field: &str,
    names: impl Iterator<Item = &'a str>,
) -> Vec<UqError> {
    let mut errors = Vec::new();
    let mut seen: Vec<&str> = Vec::new();
    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            errors.push(UqError::invalid_input(field, name, "Name must not be blank"));
        } else if seen.contains(&trimmed) {
            errors.push(UqError::invalid_input(field, name, "Name is used more than once"));
        } else {
            seen.push(trimmed);
        }
    }
    errors
}

/// Next free "<prefix><n>" name, starting at 1.
pub(crate) fn next_name<'a>(prefix: &str, existing: impl Iterator<Item = &'a str> + Clone) -> String {
    (1..)
        .map(|n| format!("{}{}", prefix, n))
        .find(|candidate| !existing.clone().any(|name| name == candidate))
        .unwrap_or_else(|| prefix.to_string())
}
