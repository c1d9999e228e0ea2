use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::schedule::Schedule;
use crate::domain::weights::ScenarioPreset;
use crate::services::backend::{Backend, BackendError};

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub scheduled_count: usize,
    pub unassigned_count: usize,
}

impl ScenarioResult {
    pub fn from_schedule(scenario_name: &str, schedule: &Schedule) -> Self {
        Self {
            scenario_name: scenario_name.to_string(),
            scheduled_count: schedule.scheduled_job_count(),
            unassigned_count: schedule.unassigned_jobs.len(),
        }
    }
}

#[derive(Error, Debug)]
#[error("scenario `{scenario}` failed after {} completed: {source}", .completed.len())]
pub struct ScenarioError {
    pub scenario: String,
    /// Rows finished before the failing preset, in preset order.
    pub completed: Vec<ScenarioResult>,
    #[source]
    pub source: BackendError,
}

/// Runs the optimizer once per preset, one call at a time, in preset order.
///
/// The optimizer is a single-flight resource so there is no fan-out. The first
/// failure stops the run and the rows gathered so far travel with the error.
pub async fn run_scenarios(
    backend: &dyn Backend,
    presets: &[ScenarioPreset],
) -> Result<Vec<ScenarioResult>, ScenarioError> {
    let mut results = Vec::with_capacity(presets.len());
    for preset in presets {
        match backend.optimize_schedule(Some(&preset.weights)).await {
            Ok(schedule) => {
                let result = ScenarioResult::from_schedule(&preset.name, &schedule);
                info!(
                    scenario = %preset.name,
                    scheduled = result.scheduled_count,
                    unassigned = result.unassigned_count,
                    "scenario evaluated"
                );
                results.push(result);
            }
            Err(source) => {
                error!(scenario = %preset.name, kind = source.kind(), %source, "scenario failed");
                return Err(ScenarioError {
                    scenario: preset.name.clone(),
                    completed: results,
                    source,
                });
            }
        }
    }
    Ok(results)
}
