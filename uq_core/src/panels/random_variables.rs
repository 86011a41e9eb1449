//! # Random Variable Panel
//!
//! A list of named random variables, each with a probability distribution.
//! Serialized under `randomVariables` as an array; the distribution is an
//! internally tagged enum so each entry reads naturally:
//!
//! ```json
//! { "name": "fy", "distribution": "Normal", "mean": 60.0, "stdDev": 6.0 }
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::{UqError, UqResult};

use super::{check_names, next_name, Panel};

const KEY: &str = "randomVariables";

/// Probability distribution of a random variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all_fields = "camelCase")]
pub enum Distribution {
    Normal { mean: f64, std_dev: f64 },
    Lognormal { mean: f64, std_dev: f64 },
    Uniform { lower_bound: f64, upper_bound: f64 },
    Beta { alpha: f64, beta: f64, lower_bound: f64, upper_bound: f64 },
    Weibull { scale: f64, shape: f64 },
    Gumbel { alpha: f64, beta: f64 },
}

/// Distribution family without parameters, for pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Normal,
    Lognormal,
    Uniform,
    Beta,
    Weibull,
    Gumbel,
}

impl DistributionKind {
    pub const ALL: &'static [DistributionKind] = &[
        DistributionKind::Normal,
        DistributionKind::Lognormal,
        DistributionKind::Uniform,
        DistributionKind::Beta,
        DistributionKind::Weibull,
        DistributionKind::Gumbel,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            DistributionKind::Normal => "Normal",
            DistributionKind::Lognormal => "Lognormal",
            DistributionKind::Uniform => "Uniform",
            DistributionKind::Beta => "Beta",
            DistributionKind::Weibull => "Weibull",
            DistributionKind::Gumbel => "Gumbel",
        }
    }

    /// Parameters a freshly selected distribution starts with
    pub fn default_distribution(&self) -> Distribution {
        match self {
            DistributionKind::Normal => Distribution::Normal { mean: 0.0, std_dev: 1.0 },
            DistributionKind::Lognormal => Distribution::Lognormal { mean: 1.0, std_dev: 0.1 },
            DistributionKind::Uniform => Distribution::Uniform {
                lower_bound: 0.0,
                upper_bound: 1.0,
            },
            DistributionKind::Beta => Distribution::Beta {
                alpha: 2.0,
                beta: 2.0,
                lower_bound: 0.0,
                upper_bound: 1.0,
            },
            DistributionKind::Weibull => Distribution::Weibull { scale: 1.0, shape: 1.0 },
            DistributionKind::Gumbel => Distribution::Gumbel { alpha: 1.0, beta: 0.0 },
        }
    }
}

impl std::fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

impl Default for Distribution {
    fn default() -> Self {
        DistributionKind::Normal.default_distribution()
    }
}

impl Distribution {
    pub fn kind(&self) -> DistributionKind {
        match self {
            Distribution::Normal { .. } => DistributionKind::Normal,
            Distribution::Lognormal { .. } => DistributionKind::Lognormal,
            Distribution::Uniform { .. } => DistributionKind::Uniform,
            Distribution::Beta { .. } => DistributionKind::Beta,
            Distribution::Weibull { .. } => DistributionKind::Weibull,
            Distribution::Gumbel { .. } => DistributionKind::Gumbel,
        }
    }

    /// Parameter labels and values, in the order editors show them
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Distribution::Normal { mean, std_dev } | Distribution::Lognormal { mean, std_dev } => {
                vec![("Mean", mean), ("Std. Dev.", std_dev)]
            }
            Distribution::Uniform { lower_bound, upper_bound } => {
                vec![("Lower Bound", lower_bound), ("Upper Bound", upper_bound)]
            }
            Distribution::Beta { alpha, beta, lower_bound, upper_bound } => vec![
                ("Alpha", alpha),
                ("Beta", beta),
                ("Lower Bound", lower_bound),
                ("Upper Bound", upper_bound),
            ],
            Distribution::Weibull { scale, shape } => vec![("Scale", scale), ("Shape", shape)],
            Distribution::Gumbel { alpha, beta } => vec![("Alpha", alpha), ("Beta", beta)],
        }
    }

    /// Set the parameter at `index` (as listed by [`parameters`](Self::parameters)).
    ///
    /// JSON has no representation for NaN or infinity, so those are rejected.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> UqResult<()> {
        if !value.is_finite() {
            return Err(UqError::invalid_input(
                "parameter",
                value.to_string(),
                "Parameters must be finite numbers",
            ));
        }
        let slot = match (self, index) {
            (Distribution::Normal { mean, .. }, 0) | (Distribution::Lognormal { mean, .. }, 0) => mean,
            (Distribution::Normal { std_dev, .. }, 1)
            | (Distribution::Lognormal { std_dev, .. }, 1) => std_dev,
            (Distribution::Uniform { lower_bound, .. }, 0) => lower_bound,
            (Distribution::Uniform { upper_bound, .. }, 1) => upper_bound,
            (Distribution::Beta { alpha, .. }, 0) | (Distribution::Gumbel { alpha, .. }, 0) => alpha,
            (Distribution::Beta { beta, .. }, 1) | (Distribution::Gumbel { beta, .. }, 1) => beta,
            (Distribution::Beta { lower_bound, .. }, 2) => lower_bound,
            (Distribution::Beta { upper_bound, .. }, 3) => upper_bound,
            (Distribution::Weibull { scale, .. }, 0) => scale,
            (Distribution::Weibull { shape, .. }, 1) => shape,
            (other, _) => {
                return Err(UqError::invalid_input(
                    "parameter",
                    index.to_string(),
                    format!("{} has no parameter at this position", other.kind()),
                ))
            }
        };
        *slot = value;
        Ok(())
    }

    /// Problems with the parameters, reported against `name`
    pub fn validate(&self, name: &str) -> Vec<UqError> {
        let mut errors = Vec::new();
        let mut require = |ok: bool, reason: &str| {
            if !ok {
                errors.push(UqError::invalid_input(name, self.kind().to_string(), reason));
            }
        };

        require(
            self.parameters().iter().all(|(_, v)| v.is_finite()),
            "Parameters must be finite numbers",
        );
        match *self {
            Distribution::Normal { std_dev, .. } => {
                require(std_dev > 0.0, "Standard deviation must be positive");
            }
            Distribution::Lognormal { mean, std_dev } => {
                require(mean > 0.0, "Lognormal mean must be positive");
                require(std_dev > 0.0, "Standard deviation must be positive");
            }
            Distribution::Uniform { lower_bound, upper_bound } => {
                require(lower_bound < upper_bound, "Lower bound must be below upper bound");
            }
            Distribution::Beta { alpha, beta, lower_bound, upper_bound } => {
                require(alpha > 0.0 && beta > 0.0, "Shape parameters must be positive");
                require(lower_bound < upper_bound, "Lower bound must be below upper bound");
            }
            Distribution::Weibull { scale, shape } => {
                require(scale > 0.0 && shape > 0.0, "Scale and shape must be positive");
            }
            Distribution::Gumbel { alpha, .. } => {
                require(alpha > 0.0, "Alpha must be positive");
            }
        }
        errors
    }
}

/// One named random variable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomVariable {
    pub name: String,
    #[serde(flatten)]
    pub distribution: Distribution,
}

impl RandomVariable {
    pub fn new(name: impl Into<String>, distribution: Distribution) -> Self {
        RandomVariable {
            name: name.into(),
            distribution,
        }
    }
}

/// Random variable input panel
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RandomVariablePanel {
    variables: Vec<RandomVariable>,
}

impl RandomVariablePanel {
    pub fn new() -> Self {
        RandomVariablePanel::default()
    }

    pub fn variables(&self) -> &[RandomVariable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RandomVariable> {
        self.variables.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RandomVariable> {
        self.variables.get_mut(index)
    }

    /// Append a variable, returning its index
    pub fn add(&mut self, variable: RandomVariable) -> usize {
        self.variables.push(variable);
        self.variables.len() - 1
    }

    /// Append a Normal variable with the next free "RV<n>" name
    pub fn add_default(&mut self) -> usize {
        let name = next_name("RV", self.variables.iter().map(|v| v.name.as_str()));
        self.add(RandomVariable::new(name, Distribution::default()))
    }

    pub fn remove(&mut self, index: usize) -> Option<RandomVariable> {
        (index < self.variables.len()).then(|| self.variables.remove(index))
    }

    /// Switch the distribution family, resetting its parameters.
    ///
    /// Selecting the current family keeps the parameters.
    pub fn set_distribution_kind(&mut self, index: usize, kind: DistributionKind) -> UqResult<()> {
        let variable = self.variable_mut(index)?;
        if variable.distribution.kind() != kind {
            variable.distribution = kind.default_distribution();
        }
        Ok(())
    }

    pub fn set_name(&mut self, index: usize, name: impl Into<String>) -> UqResult<()> {
        self.variable_mut(index)?.name = name.into();
        Ok(())
    }

    pub fn set_parameter(&mut self, index: usize, parameter: usize, value: f64) -> UqResult<()> {
        self.variable_mut(index)?.distribution.set_parameter(parameter, value)
    }

    fn variable_mut(&mut self, index: usize) -> UqResult<&mut RandomVariable> {
        let count = self.variables.len();
        self.variables.get_mut(index).ok_or_else(|| {
            UqError::invalid_input(
                "index",
                index.to_string(),
                format!("only {} random variable(s) defined", count),
            )
        })
    }
}

impl Panel for RandomVariablePanel {
    fn key(&self) -> &'static str {
        KEY
    }

    fn title(&self) -> &'static str {
        "Random Variables"
    }

    fn clear(&mut self) {
        self.variables.clear();
    }

    fn output_to_json(&self, doc: &mut Document) -> UqResult<()> {
        let non_finite = self
            .variables
            .iter()
            .find(|v| v.distribution.parameters().iter().any(|(_, p)| !p.is_finite()));
        if let Some(variable) = non_finite {
            return Err(UqError::invalid_input(
                variable.name.as_str(),
                variable.distribution.kind().to_string(),
                "Parameters must be finite numbers",
            ));
        }
        doc.insert_section(self.key(), &self.variables)
    }

    fn input_from_json(&mut self, doc: &Document) -> UqResult<()> {
        let variables: Vec<RandomVariable> = doc.decode_section(self.key())?.unwrap_or_default();
        debug!("read {} random variable(s)", variables.len());
        self.variables = variables;
        Ok(())
    }

    fn validate(&self) -> Vec<UqError> {
        let mut errors = check_names("name", self.variables.iter().map(|v| v.name.as_str()));
        for variable in &self.variables {
            errors.extend(variable.distribution.validate(&variable.name));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_shape() {
        let variable = RandomVariable::new(
            "fy",
            Distribution::Normal {
                mean: 60.0,
                std_dev: 6.0,
            },
        );
        let value = serde_json::to_value(&variable).unwrap();
        assert_eq!(
            value,
            json!({"name": "fy", "distribution": "Normal", "mean": 60.0, "stdDev": 6.0})
        );
    }

    #[test]
    fn test_beta_reads_camel_case_bounds() {
        let variable: RandomVariable = serde_json::from_value(json!({
            "name": "b",
            "distribution": "Beta",
            "alpha": 2.0,
            "beta": 3.0,
            "lowerBound": 0.5,
            "upperBound": 4.0
        }))
        .unwrap();
        assert_eq!(
            variable.distribution,
            Distribution::Beta {
                alpha: 2.0,
                beta: 3.0,
                lower_bound: 0.5,
                upper_bound: 4.0
            }
        );
    }

    #[test]
    fn test_unknown_distribution_rejected() {
        let mut doc = Document::new();
        doc.insert_section(KEY, json!([{"name": "x", "distribution": "Cauchy"}]))
            .unwrap();
        let mut panel = RandomVariablePanel::new();
        panel.add_default();
        assert!(panel.input_from_json(&doc).is_err());
        assert_eq!(panel.len(), 1);
    }

    #[test]
    fn test_missing_section_clears() {
        let mut panel = RandomVariablePanel::new();
        panel.add_default();
        panel.input_from_json(&Document::new()).unwrap();
        assert!(panel.is_empty());
    }

    #[test]
    fn test_switching_kind_resets_parameters() {
        let mut panel = RandomVariablePanel::new();
        let idx = panel.add_default();
        panel.set_parameter(idx, 0, 5.0).unwrap();

        panel.set_distribution_kind(idx, DistributionKind::Normal).unwrap();
        assert_eq!(panel.get(idx).unwrap().distribution.parameters()[0].1, 5.0);

        panel.set_distribution_kind(idx, DistributionKind::Uniform).unwrap();
        assert_eq!(
            panel.get(idx).unwrap().distribution,
            DistributionKind::Uniform.default_distribution()
        );
    }

    #[test]
    fn test_set_parameter_out_of_range() {
        let mut dist = DistributionKind::Weibull.default_distribution();
        assert!(dist.set_parameter(2, 1.0).is_err());
        dist.set_parameter(1, 3.5).unwrap();
        assert_eq!(dist, Distribution::Weibull { scale: 1.0, shape: 3.5 });
    }

    #[test]
    fn test_every_default_distribution_is_valid() {
        for kind in DistributionKind::ALL {
            let dist = kind.default_distribution();
            assert_eq!(dist.kind(), *kind);
            assert!(dist.validate("x").is_empty(), "{} default invalid", kind);
        }
    }

    #[test]
    fn test_validation_catches_bad_parameters() {
        let mut panel = RandomVariablePanel::new();
        panel.add(RandomVariable::new(
            "u",
            Distribution::Uniform {
                lower_bound: 2.0,
                upper_bound: 1.0,
            },
        ));
        panel.add(RandomVariable::new(
            "u",
            Distribution::Normal {
                mean: 0.0,
                std_dev: f64::NAN,
            },
        ));
        let errors = panel.validate();
        // duplicate name, inverted bounds, non-finite, non-positive std dev
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_add_default_names_are_unique() {
        let mut panel = RandomVariablePanel::new();
        panel.add_default();
        panel.add_default();
        panel.remove(0);
        panel.add_default();
        let names: Vec<_> = panel.variables().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["RV2", "RV1"]);
        assert!(panel.remove(5).is_none());
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let mut panel = RandomVariablePanel::new();
        let idx = panel.add_default();
        assert!(panel.set_parameter(idx, 0, f64::INFINITY).is_err());
        assert!(panel.set_parameter(idx, 1, f64::NAN).is_err());
        assert_eq!(panel.get(idx).unwrap().distribution, Distribution::default());
    }

    #[test]
    fn test_non_finite_parameters_not_written() {
        let mut panel = RandomVariablePanel::new();
        panel.add(RandomVariable::new(
            "fy",
            Distribution::Normal { mean: f64::NAN, std_dev: 1.0 },
        ));
        let mut doc = Document::new();
        assert!(panel.output_to_json(&mut doc).is_err());
        assert!(doc.is_empty());
    }
}
