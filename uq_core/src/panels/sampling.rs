//! Sampling method panel.
//!
//! Serialized under `samplingMethod`:
//!
//! ```json
//! { "method": "LHS", "samples": 1000, "seed": 1 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::{UqError, UqResult};

use super::Panel;

const KEY: &str = "samplingMethod";

pub const DEFAULT_SAMPLES: u32 = 1000;
pub const DEFAULT_SEED: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SamplingMethod {
    /// Latin hypercube sampling
    #[default]
    #[serde(rename = "LHS")]
    LatinHypercube,
    #[serde(rename = "Monte Carlo")]
    MonteCarlo,
}

impl SamplingMethod {
    pub const ALL: &'static [SamplingMethod] =
        &[SamplingMethod::LatinHypercube, SamplingMethod::MonteCarlo];

    pub fn display_name(&self) -> &'static str {
        match self {
            SamplingMethod::LatinHypercube => "LHS",
            SamplingMethod::MonteCarlo => "Monte Carlo",
        }
    }
}

impl std::fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingPanel {
    pub method: SamplingMethod,
    pub samples: u32,
    pub seed: u64,
}

impl Default for SamplingPanel {
    fn default() -> Self {
        SamplingPanel {
            method: SamplingMethod::default(),
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
        }
    }
}

impl SamplingPanel {
    pub fn new() -> Self {
        SamplingPanel::default()
    }

    pub fn set_method(&mut self, method: SamplingMethod) {
        self.method = method;
    }

    pub fn set_samples(&mut self, samples: u32) {
        self.samples = samples;
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }
}

impl Panel for SamplingPanel {
    fn key(&self) -> &'static str {
        KEY
    }

    fn title(&self) -> &'static str {
        "Sampling Method"
    }

    fn clear(&mut self) {
        *self = SamplingPanel::default();
    }

    fn output_to_json(&self, doc: &mut Document) -> UqResult<()> {
        doc.insert_section(self.key(), self)
    }

    fn input_from_json(&mut self, doc: &Document) -> UqResult<()> {
        let sampling: SamplingPanel = doc.decode_section(self.key())?.unwrap_or_default();
        debug!(
            "read sampling section: {} x{} (seed {})",
            sampling.method, sampling.samples, sampling.seed
        );
        *self = sampling;
        Ok(())
    }

    fn validate(&self) -> Vec<UqError> {
        if self.samples == 0 {
            vec![UqError::invalid_input(
                "samples",
                "0",
                "At least one sample is required",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_names() {
        assert_eq!(
            serde_json::to_value(SamplingMethod::MonteCarlo).unwrap(),
            json!("Monte Carlo")
        );
        assert_eq!(
            serde_json::to_value(SamplingMethod::LatinHypercube).unwrap(),
            json!("LHS")
        );
    }

    #[test]
    fn test_output_shape() {
        let mut doc = Document::new();
        SamplingPanel::new().output_to_json(&mut doc).unwrap();
        assert_eq!(
            doc.decode_section::<serde_json::Value>(KEY).unwrap().unwrap(),
            json!({"method": "LHS", "samples": 1000, "seed": 1})
        );
    }

    #[test]
    fn test_negative_samples_rejected() {
        let mut doc = Document::new();
        doc.insert_section(KEY, json!({"samples": -5})).unwrap();
        let mut panel = SamplingPanel::new();
        panel.set_samples(20);
        assert!(panel.input_from_json(&doc).is_err());
        assert_eq!(panel.samples, 20);
    }

    #[test]
    fn test_zero_samples_invalid() {
        let mut panel = SamplingPanel::new();
        panel.set_samples(0);
        assert_eq!(panel.validate().len(), 1);
    }
}
