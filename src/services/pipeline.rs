//! Drives the backend through the dashboard load sequence and owns the
//! application state every derived view is built from.
//!
//! `run` and `recompute` take `&mut self`, so a second run cannot start on the
//! same orchestrator while one is in flight. Callers that share an orchestrator
//! across tasks have to put it behind a lock, which serializes the writers of
//! the weights/schedule pair.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use crate::domain::job::JobRecord;
use crate::domain::machine::MachineRiskRecord;
use crate::domain::maintenance::MaintenanceEvent;
use crate::domain::schedule::Schedule;
use crate::domain::weights::{ScenarioPreset, WeightError, WeightVector};
use crate::services::backend::{Backend, BackendError, TrainingMetrics};
use crate::services::risk_projection::{project_fleet, FleetKpis};
use crate::services::scenario_runner::{run_scenarios, ScenarioError, ScenarioResult};
use crate::services::schedule_kpis::{aggregate_schedule, ScheduleKpis};

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStage {
    #[default]
    Idle,
    GeneratingData,
    Training,
    FetchingRisk,
    OptimizingSchedule,
    RunningScenarios,
    FetchingJobs,
    SimulatingMaintenance,
}

impl PipelineStage {
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Idle => "idle",
            PipelineStage::GeneratingData => "generating-data",
            PipelineStage::Training => "training",
            PipelineStage::FetchingRisk => "fetching-risk",
            PipelineStage::OptimizingSchedule => "optimizing-schedule",
            PipelineStage::RunningScenarios => "running-scenarios",
            PipelineStage::FetchingJobs => "fetching-jobs",
            PipelineStage::SimulatingMaintenance => "simulating-maintenance",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("stage {stage} failed: {source}")]
    Stage {
        stage: PipelineStage,
        #[source]
        source: BackendError,
    },
    #[error("stage running-scenarios failed: {0}")]
    Scenarios(#[from] ScenarioError),
    #[error("invalid weights: {0}")]
    InvalidWeights(#[from] WeightError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::Stage { stage, .. } => *stage,
            PipelineError::Scenarios(_) => PipelineStage::RunningScenarios,
            PipelineError::InvalidWeights(_) => PipelineStage::Idle,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Stage { source, .. } => source.kind(),
            PipelineError::Scenarios(err) => err.source.kind(),
            PipelineError::InvalidWeights(_) => "InvalidWeights",
        }
    }
}

/// Last failure, kept for display next to the stale-but-valid state.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FailureReport {
    pub stage: PipelineStage,
    pub kind: String,
    pub message: String,
}

impl From<&PipelineError> for FailureReport {
    fn from(err: &PipelineError) -> Self {
        Self {
            stage: err.stage(),
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub stage: PipelineStage,
    pub loading: bool,
    pub weights: WeightVector,
    pub training_metrics: Option<TrainingMetrics>,
    pub risk_records: Vec<MachineRiskRecord>,
    pub fleet_kpis: FleetKpis,
    pub schedule: Option<Schedule>,
    pub schedule_kpis: ScheduleKpis,
    pub scenarios: Vec<ScenarioResult>,
    pub jobs: Vec<JobRecord>,
    pub maintenance: Vec<MaintenanceEvent>,
    pub last_failure: Option<FailureReport>,
}

impl AppState {
    pub fn with_weights(weights: WeightVector) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Replaces the risk snapshot and recounts the baseline buckets.
    pub fn set_risk_snapshot(&mut self, records: Vec<MachineRiskRecord>) {
        self.fleet_kpis = FleetKpis::from_records(&records);
        self.risk_records = records;
    }

    pub fn set_schedule(&mut self, schedule: Schedule) {
        self.schedule_kpis = aggregate_schedule(&schedule);
        self.schedule = Some(schedule);
    }

    pub fn projected_fleet(&self) -> FleetKpis {
        project_fleet(&self.fleet_kpis, &self.weights)
    }
}

pub struct PipelineOrchestrator {
    backend: Box<dyn Backend>,
    presets: Vec<ScenarioPreset>,
    state: AppState,
}

impl PipelineOrchestrator {
    pub fn new(
        backend: Box<dyn Backend>,
        presets: Vec<ScenarioPreset>,
        weights: WeightVector,
    ) -> Self {
        Self {
            backend,
            presets,
            state: AppState::with_weights(weights),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Full load sequence. Stops at the first failing stage; whatever earlier
    /// stages stored stays in place.
    pub async fn run(&mut self) -> Result<(), PipelineError> {
        info!("pipeline started");
        self.state.loading = true;
        self.state.last_failure = None;
        let outcome = self.run_stages().await;
        self.finish(outcome)
    }

    /// Re-optimizes for new weights without touching the rest of the state.
    pub async fn recompute(&mut self, weights: WeightVector) -> Result<(), PipelineError> {
        weights.validate()?;
        self.state.weights = weights;
        self.state.loading = true;
        self.state.last_failure = None;
        self.enter(PipelineStage::OptimizingSchedule);
        let outcome = match self.backend.optimize_schedule(Some(&weights)).await {
            Ok(schedule) => {
                self.state.set_schedule(schedule);
                Ok(())
            }
            Err(source) => Err(PipelineError::Stage {
                stage: PipelineStage::OptimizingSchedule,
                source,
            }),
        };
        self.finish(outcome)
    }

    /// Refreshes only the risk snapshot, e.g. before a standalone recompute.
    pub async fn refresh_risk(&mut self) -> Result<(), PipelineError> {
        self.state.loading = true;
        self.state.last_failure = None;
        self.enter(PipelineStage::FetchingRisk);
        let outcome = match self.backend.high_risk_machines().await {
            Ok(records) => {
                self.state.set_risk_snapshot(records);
                Ok(())
            }
            Err(source) => Err(PipelineError::Stage {
                stage: PipelineStage::FetchingRisk,
                source,
            }),
        };
        self.finish(outcome)
    }

    async fn run_stages(&mut self) -> Result<(), PipelineError> {
        self.enter(PipelineStage::GeneratingData);
        let generated = self
            .backend
            .generate_data()
            .await
            .map_err(stage_failure(PipelineStage::GeneratingData))?;
        info!(machines = generated.machines, jobs = generated.jobs, "data generated");

        self.enter(PipelineStage::Training);
        let trained = self
            .backend
            .train_model()
            .await
            .map_err(stage_failure(PipelineStage::Training))?;
        self.state.training_metrics = trained.metrics;

        self.enter(PipelineStage::FetchingRisk);
        let records = self
            .backend
            .high_risk_machines()
            .await
            .map_err(stage_failure(PipelineStage::FetchingRisk))?;
        self.state.set_risk_snapshot(records);

        self.enter(PipelineStage::OptimizingSchedule);
        let weights = self.state.weights;
        let schedule = self
            .backend
            .optimize_schedule(Some(&weights))
            .await
            .map_err(stage_failure(PipelineStage::OptimizingSchedule))?;
        self.state.set_schedule(schedule);

        self.enter(PipelineStage::RunningScenarios);
        match run_scenarios(self.backend.as_ref(), &self.presets).await {
            Ok(results) => self.state.scenarios = results,
            Err(err) => {
                // Partial rows replace the old table so they show next to the failure.
                self.state.scenarios = err.completed.clone();
                return Err(err.into());
            }
        }

        self.enter(PipelineStage::FetchingJobs);
        self.state.jobs = self
            .backend
            .jobs()
            .await
            .map_err(stage_failure(PipelineStage::FetchingJobs))?;

        self.enter(PipelineStage::SimulatingMaintenance);
        self.state.maintenance = self
            .backend
            .simulate_maintenance()
            .await
            .map_err(stage_failure(PipelineStage::SimulatingMaintenance))?;

        Ok(())
    }

    fn enter(&mut self, stage: PipelineStage) {
        info!(%stage, "entering stage");
        self.state.stage = stage;
    }

    fn finish(&mut self, outcome: Result<(), PipelineError>) -> Result<(), PipelineError> {
        self.state.loading = false;
        self.state.stage = PipelineStage::Idle;
        match &outcome {
            Ok(()) => info!("pipeline finished"),
            Err(err) => {
                error!(stage = %err.stage(), kind = err.kind(), %err, "pipeline aborted");
                self.state.last_failure = Some(FailureReport::from(err));
            }
        }
        outcome
    }
}

fn stage_failure(stage: PipelineStage) -> impl FnOnce(BackendError) -> PipelineError {
    move |source| PipelineError::Stage { stage, source }
}
