use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("weight `{name}` must be within [0, 1], got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Relative priority of throughput, risk mitigation and cost. Components are
/// independent and need not sum to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightVector {
    pub throughput: f64,
    pub risk: f64,
    pub cost: f64,
}

impl Default for WeightVector {
    fn default() -> Self {
        Self {
            throughput: 0.4,
            risk: 0.3,
            cost: 0.3,
        }
    }
}

impl WeightVector {
    pub fn new(throughput: f64, risk: f64, cost: f64) -> Self {
        Self {
            throughput,
            risk,
            cost,
        }
    }

    /// Replaces the components that were given, keeping the rest.
    pub fn with_overrides(
        self,
        throughput: Option<f64>,
        risk: Option<f64>,
        cost: Option<f64>,
    ) -> Self {
        Self {
            throughput: throughput.unwrap_or(self.throughput),
            risk: risk.unwrap_or(self.risk),
            cost: cost.unwrap_or(self.cost),
        }
    }

    pub fn validate(&self) -> Result<(), WeightError> {
        for (name, value) in [
            ("throughput", self.throughput),
            ("risk", self.risk),
            ("cost", self.cost),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(WeightError::OutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Query parameters understood by the optimizer endpoint.
    pub fn query_params(&self) -> [(&'static str, String); 3] {
        [
            ("w_throughput", self.throughput.to_string()),
            ("w_risk", self.risk.to_string()),
            ("w_cost", self.cost.to_string()),
        ]
    }
}

/// Named weight preset compared by the scenario runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPreset {
    pub name: String,
    #[serde(flatten)]
    pub weights: WeightVector,
}

impl ScenarioPreset {
    pub fn new(name: &str, weights: WeightVector) -> Self {
        Self {
            name: name.to_string(),
            weights,
        }
    }
}

pub fn default_presets() -> Vec<ScenarioPreset> {
    vec![
        ScenarioPreset::new("Max Throughput", WeightVector::new(0.7, 0.2, 0.1)),
        ScenarioPreset::new("Balanced", WeightVector::default()),
        ScenarioPreset::new("Risk Averse", WeightVector::new(0.2, 0.6, 0.2)),
    ]
}
