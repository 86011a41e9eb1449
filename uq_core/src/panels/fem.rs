//! Finite-element model panel.
//!
//! Serialized under `fem`:
//!
//! ```json
//! { "program": "OpenSees", "mainInput": "model.tcl", "postprocessScript": "post.tcl" }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::{UqError, UqResult};

use super::Panel;

const KEY: &str = "fem";

/// Finite-element program that evaluates each sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FemProgram {
    #[default]
    OpenSees,
    #[serde(rename = "FEAPpv")]
    FeapPv,
}

impl FemProgram {
    pub const ALL: &'static [FemProgram] = &[FemProgram::OpenSees, FemProgram::FeapPv];

    pub fn display_name(&self) -> &'static str {
        match self {
            FemProgram::OpenSees => "OpenSees",
            FemProgram::FeapPv => "FEAPpv",
        }
    }
}

impl std::fmt::Display for FemProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FemPanel {
    pub program: FemProgram,
    /// Path to the model input file
    pub main_input: String,
    /// Path to the script that extracts EDPs from the model output
    pub postprocess_script: String,
}

impl FemPanel {
    pub fn new() -> Self {
        FemPanel::default()
    }

    pub fn set_program(&mut self, program: FemProgram) {
        self.program = program;
    }

    pub fn set_main_input(&mut self, path: impl Into<String>) {
        self.main_input = path.into();
    }

    pub fn set_postprocess_script(&mut self, path: impl Into<String>) {
        self.postprocess_script = path.into();
    }
}

impl Panel for FemPanel {
    fn key(&self) -> &'static str {
        KEY
    }

    fn title(&self) -> &'static str {
        "Finite Element Model"
    }

    fn clear(&mut self) {
        *self = FemPanel::default();
    }

    fn output_to_json(&self, doc: &mut Document) -> UqResult<()> {
        doc.insert_section(self.key(), self)
    }

    fn input_from_json(&mut self, doc: &Document) -> UqResult<()> {
        let fem: FemPanel = doc.decode_section(self.key())?.unwrap_or_default();
        debug!("read FEM section: {} '{}'", fem.program, fem.main_input);
        *self = fem;
        Ok(())
    }

    fn validate(&self) -> Vec<UqError> {
        let mut errors = Vec::new();
        for (field, value) in [
            ("mainInput", &self.main_input),
            ("postprocessScript", &self.postprocess_script),
        ] {
            if !value.is_empty() && value.trim().is_empty() {
                errors.push(UqError::invalid_input(field, value.as_str(), "Path must not be blank"));
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_shape() {
        let mut panel = FemPanel::new();
        panel.set_program(FemProgram::FeapPv);
        panel.set_main_input("frame.inp");
        let mut doc = Document::new();
        panel.output_to_json(&mut doc).unwrap();
        assert_eq!(
            doc.decode_section::<serde_json::Value>(KEY).unwrap().unwrap(),
            json!({"program": "FEAPpv", "mainInput": "frame.inp", "postprocessScript": ""})
        );
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let mut doc = Document::new();
        doc.insert_section(KEY, json!({"mainInput": "model.tcl"})).unwrap();
        let mut panel = FemPanel::new();
        panel.input_from_json(&doc).unwrap();
        assert_eq!(panel.program, FemProgram::OpenSees);
        assert_eq!(panel.main_input, "model.tcl");
    }

    #[test]
    fn test_blank_path_invalid() {
        let mut panel = FemPanel::new();
        assert!(panel.validate().is_empty());
        panel.set_main_input("   ");
        assert_eq!(panel.validate()[0].error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_clear_resets_program() {
        let mut panel = FemPanel::new();
        panel.set_program(FemProgram::FeapPv);
        panel.set_postprocess_script("post.tcl");
        panel.clear();
        assert_eq!(panel, FemPanel::default());
    }
}
