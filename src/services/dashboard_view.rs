use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::weights::WeightVector;
use crate::services::backend::TrainingMetrics;
use crate::services::deferral::{explain_deferrals, DeferredJobEntry};
use crate::services::maintenance_summary::{summarize_maintenance, MaintenanceSummary};
use crate::services::pipeline::{AppState, FailureReport};
use crate::services::risk_projection::FleetKpis;
use crate::services::scenario_runner::ScenarioResult;
use crate::services::schedule_kpis::ScheduleKpis;
use crate::services::timeline::{build_timeline, TimelineTask};

/// Everything the dashboard shows, derived from one [`AppState`].
#[derive(Serialize, Debug, Clone)]
pub struct DashboardSnapshot {
    pub generated_at: DateTime<Utc>,
    pub weights: WeightVector,
    pub training_metrics: Option<TrainingMetrics>,
    pub schedule_kpis: ScheduleKpis,
    pub fleet_kpis: FleetKpis,
    pub projected_fleet_kpis: FleetKpis,
    pub timeline: Vec<TimelineTask>,
    pub deferred_jobs: Vec<DeferredJobEntry>,
    pub scenarios: Vec<ScenarioResult>,
    pub maintenance: MaintenanceSummary,
    pub listed_jobs: usize,
    pub failure: Option<FailureReport>,
}

impl DashboardSnapshot {
    /// `now` anchors the timeline; capture it once per build.
    pub fn build(state: &AppState, now: DateTime<Utc>) -> Self {
        let (timeline, deferred_jobs) = match &state.schedule {
            Some(schedule) => (
                build_timeline(schedule, now),
                explain_deferrals(&schedule.unassigned_jobs),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Self {
            generated_at: now,
            weights: state.weights,
            training_metrics: state.training_metrics,
            schedule_kpis: state.schedule_kpis,
            fleet_kpis: state.fleet_kpis,
            projected_fleet_kpis: state.projected_fleet(),
            timeline,
            deferred_jobs,
            scenarios: state.scenarios.clone(),
            maintenance: summarize_maintenance(&state.maintenance),
            listed_jobs: state.jobs.len(),
            failure: state.last_failure.clone(),
        }
    }
}

pub fn serialize_snapshot_to_yaml<W: Write>(
    writer: &mut W,
    snapshot: &DashboardSnapshot,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(snapshot).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
