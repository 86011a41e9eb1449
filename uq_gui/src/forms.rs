//! Text buffers for numeric inputs.
//!
//! Text inputs edit strings, panels store numbers. A buffer keeps whatever
//! the user typed; the panel value only changes when the text parses.

use uq_core::panels::{PanelSet, RandomVariable};

/// Editable text of every numeric field on screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDrafts {
    /// Parameter text per random variable, in `Distribution::parameters` order
    pub rv_params: Vec<Vec<String>>,
    pub samples: String,
    pub seed: String,
}

impl FormDrafts {
    /// Fresh buffers showing the panels' current values
    pub fn from_panels(panels: &PanelSet) -> Self {
        FormDrafts {
            rv_params: panels
                .random_variables
                .variables()
                .iter()
                .map(param_texts)
                .collect(),
            samples: panels.sampling.samples.to_string(),
            seed: panels.sampling.seed.to_string(),
        }
    }

    /// Re-read one random variable's parameters (after add or kind change)
    pub fn refresh_rv(&mut self, index: usize, variable: &RandomVariable) {
        let texts = param_texts(variable);
        match self.rv_params.get_mut(index) {
            Some(slot) => *slot = texts,
            None => self.rv_params.push(texts),
        }
    }

    pub fn remove_rv(&mut self, index: usize) {
        if index < self.rv_params.len() {
            self.rv_params.remove(index);
        }
    }

    pub fn rv_param(&self, index: usize, parameter: usize) -> &str {
        self.rv_params
            .get(index)
            .and_then(|params| params.get(parameter))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set_rv_param(&mut self, index: usize, parameter: usize, text: String) {
        if let Some(slot) = self
            .rv_params
            .get_mut(index)
            .and_then(|params| params.get_mut(parameter))
        {
            *slot = text;
        }
    }
}

fn param_texts(variable: &RandomVariable) -> Vec<String> {
    variable
        .distribution
        .parameters()
        .into_iter()
        .map(|(_, value)| value.to_string())
        .collect()
}

/// Parse a finite number, tolerating surrounding whitespace
pub fn parse_f64(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uq_core::panels::DistributionKind;

    #[test]
    fn test_drafts_mirror_panels() {
        let mut panels = PanelSet::new();
        panels.random_variables.add_default();
        panels.sampling.set_seed(42);

        let drafts = FormDrafts::from_panels(&panels);
        assert_eq!(drafts.rv_params, vec![vec!["0".to_string(), "1".to_string()]]);
        assert_eq!(drafts.samples, "1000");
        assert_eq!(drafts.seed, "42");
    }

    #[test]
    fn test_refresh_after_kind_change() {
        let mut panels = PanelSet::new();
        let idx = panels.random_variables.add_default();
        let mut drafts = FormDrafts::from_panels(&panels);

        panels
            .random_variables
            .set_distribution_kind(idx, DistributionKind::Beta)
            .unwrap();
        drafts.refresh_rv(idx, panels.random_variables.get(idx).unwrap());
        assert_eq!(drafts.rv_params[0].len(), 4);
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(" 2.5 "), Some(2.5));
        assert_eq!(parse_f64("inf"), None);
        assert_eq!(parse_f64("abc"), None);
    }

    #[test]
    fn test_out_of_range_edits_are_ignored() {
        let mut drafts = FormDrafts::default();
        drafts.set_rv_param(3, 0, "1".to_string());
        drafts.remove_rv(3);
        assert_eq!(drafts.rv_param(3, 0), "");
    }
}
