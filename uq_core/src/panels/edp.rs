//! Engineering demand parameter (EDP) panel.
//!
//! Serialized under `edps` as `[{ "name": "Disp_1_1" }, ...]`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::{UqError, UqResult};

use super::{check_names, next_name, Panel};

const KEY: &str = "edps";

/// A response quantity the model reports back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edp {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdpPanel {
    entries: Vec<Edp>,
}

impl EdpPanel {
    pub fn new() -> Self {
        EdpPanel::default()
    }

    pub fn entries(&self) -> &[Edp] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an EDP, returning its index
    pub fn add(&mut self, name: impl Into<String>) -> usize {
        self.entries.push(Edp { name: name.into() });
        self.entries.len() - 1
    }

    /// Append an EDP with the next free "EDP<n>" name
    pub fn add_default(&mut self) -> usize {
        let name = next_name("EDP", self.entries.iter().map(|e| e.name.as_str()));
        self.add(name)
    }

    pub fn remove(&mut self, index: usize) -> Option<Edp> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> UqResult<()> {
        let count = self.entries.len();
        let entry = self.entries.get_mut(index).ok_or_else(|| {
            UqError::invalid_input("index", index.to_string(), format!("only {} EDP(s) defined", count))
        })?;
        entry.name = name.into();
        Ok(())
    }
}

impl Panel for EdpPanel {
    fn key(&self) -> &'static str {
        KEY
    }

    fn title(&self) -> &'static str {
        "Engineering Demand Parameters"
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn output_to_json(&self, doc: &mut Document) -> UqResult<()> {
        doc.insert_section(self.key(), &self.entries)
    }

    fn input_from_json(&mut self, doc: &Document) -> UqResult<()> {
        let entries: Vec<Edp> = doc.decode_section(self.key())?.unwrap_or_default();
        debug!("read {} EDP(s)", entries.len());
        self.entries = entries;
        Ok(())
    }

    fn validate(&self) -> Vec<UqError> {
        check_names("edp", self.entries.iter().map(|e| e.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_output_shape() {
        let mut panel = EdpPanel::new();
        panel.add("Disp_1_1");
        panel.add("Accel_2_1");
        let mut doc = Document::new();
        panel.output_to_json(&mut doc).unwrap();
        assert_eq!(
            doc.decode_section::<serde_json::Value>(KEY).unwrap().unwrap(),
            json!([{"name": "Disp_1_1"}, {"name": "Accel_2_1"}])
        );
    }

    #[test]
    fn test_rename_and_remove() {
        let mut panel = EdpPanel::new();
        let idx = panel.add_default();
        panel.rename(idx, "Drift").unwrap();
        assert_eq!(panel.entries()[0].name, "Drift");
        assert!(panel.rename(3, "x").is_err());
        assert_eq!(panel.remove(0).unwrap().name, "Drift");
        assert!(panel.is_empty());
    }

    #[test]
    fn test_input_replaces_entries() {
        let mut doc = Document::new();
        doc.insert_section(KEY, json!([{"name": "Disp_1_1"}])).unwrap();
        let mut panel = EdpPanel::new();
        panel.add("stale");
        panel.input_from_json(&doc).unwrap();
        assert_eq!(panel.entries(), &[Edp { name: "Disp_1_1".to_string() }]);
    }

    #[test]
    fn test_duplicate_names_invalid() {
        let mut panel = EdpPanel::new();
        panel.add("Disp");
        panel.add("Disp");
        assert_eq!(panel.validate().len(), 1);
    }
}
