use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::job::JobRecord;
use crate::domain::machine::{MachineRecord, MachineRiskRecord, RiskLevel};
use crate::domain::maintenance::{MaintenanceEvent, MaintenanceOutcome};
use crate::domain::schedule::{MachineSchedule, Schedule, ScheduleJob};
use crate::domain::weights::WeightVector;
use crate::services::backend::{
    Backend, BackendError, GenerateDataAck, HealthStatus, TrainingAck, TrainingMetrics,
};

pub fn schedule_job(
    id: &str,
    start: f64,
    end: f64,
    deadline: f64,
    revenue: Option<f64>,
) -> ScheduleJob {
    ScheduleJob {
        job_id: id.to_string(),
        start,
        end,
        deadline_hours: Some(deadline),
        revenue,
    }
}

pub fn machine(id: &str, jobs: Vec<ScheduleJob>) -> MachineSchedule {
    MachineSchedule {
        machine_id: id.to_string(),
        schedule: jobs,
    }
}

pub fn risk_record(id: &str, health_score: f64, risk_level: RiskLevel) -> MachineRiskRecord {
    MachineRiskRecord {
        machine_id: id.to_string(),
        health_score,
        risk_level,
        failure_probability: None,
    }
}

pub fn maintenance_event(id: &str, immediate_cost: f64, delayed_cost: f64) -> MaintenanceEvent {
    MaintenanceEvent {
        machine_id: id.to_string(),
        immediate: MaintenanceOutcome {
            cost: immediate_cost,
            downtime: 2.0,
            production_loss: 100.0,
        },
        delayed: MaintenanceOutcome {
            cost: delayed_cost,
            downtime: 3.0,
            production_loss: 240.0,
        },
    }
}

/// Two scheduled jobs on M1, one unassigned.
pub fn sample_schedule() -> Schedule {
    Schedule {
        machine_schedules: vec![machine(
            "M1",
            vec![
                schedule_job("J1", 0.0, 4.0, 5.0, Some(100.0)),
                schedule_job("J2", 4.0, 10.0, 8.0, Some(50.0)),
            ],
        )],
        unassigned_jobs: vec!["J3".to_string()],
    }
}

/// Scripted in-process backend. Records every call in order.
pub struct FakeBackend {
    pub calls: Mutex<Vec<String>>,
    /// Endpoint name that answers with a connection error.
    pub fail_on: Option<&'static str>,
    pub risk_records: Vec<MachineRiskRecord>,
    pub maintenance: Vec<MaintenanceEvent>,
    /// Consumed one per optimizer call; falls back to `sample_schedule()`.
    pub optimize_results: Mutex<VecDeque<Result<Schedule, BackendError>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: None,
            risk_records: vec![
                risk_record("M1", 90.0, RiskLevel::Healthy),
                risk_record("M2", 60.0, RiskLevel::Warning),
                risk_record("M3", 20.0, RiskLevel::HighRisk),
            ],
            maintenance: vec![maintenance_event("M1", 700.0, 1200.0)],
            optimize_results: Mutex::new(VecDeque::new()),
        }
    }

    pub fn failing_on(endpoint: &'static str) -> Self {
        Self {
            fail_on: Some(endpoint),
            ..Self::new()
        }
    }

    pub fn with_optimize_results(results: Vec<Result<Schedule, BackendError>>) -> Self {
        Self {
            optimize_results: Mutex::new(results.into()),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, endpoint: &'static str, detail: String) -> Result<(), BackendError> {
        self.calls.lock().unwrap().push(format!("{endpoint}{detail}"));
        if self.fail_on == Some(endpoint) {
            return Err(BackendError::Connection(format!("{endpoint} unreachable")));
        }
        Ok(())
    }
}

#[async_trait]
impl Backend for FakeBackend {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.record("health", String::new())?;
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }

    async fn generate_data(&self) -> Result<GenerateDataAck, BackendError> {
        self.record("generate-data", String::new())?;
        Ok(GenerateDataAck {
            message: "Synthetic data generated".to_string(),
            machines: 3,
            jobs: 3,
        })
    }

    async fn train_model(&self) -> Result<TrainingAck, BackendError> {
        self.record("train-model", String::new())?;
        Ok(TrainingAck {
            message: "Model trained".to_string(),
            metrics: Some(TrainingMetrics {
                accuracy: 0.9,
                f1_score: 0.8,
            }),
        })
    }

    async fn machines(&self) -> Result<Vec<MachineRecord>, BackendError> {
        self.record("machines", String::new())?;
        Ok(Vec::new())
    }

    async fn high_risk_machines(&self) -> Result<Vec<MachineRiskRecord>, BackendError> {
        self.record("high-risk-machines", String::new())?;
        Ok(self.risk_records.clone())
    }

    async fn simulate_maintenance(&self) -> Result<Vec<MaintenanceEvent>, BackendError> {
        self.record("simulate-maintenance", String::new())?;
        Ok(self.maintenance.clone())
    }

    async fn jobs(&self) -> Result<Vec<JobRecord>, BackendError> {
        self.record("jobs", String::new())?;
        Ok(vec![JobRecord {
            job_id: "J1".to_string(),
            required_machine_type: "CNC".to_string(),
            processing_time_hours: 4.0,
            priority_level: Some(3),
            deadline_hours: 5.0,
            revenue: Some(100.0),
        }])
    }

    async fn optimize_schedule(
        &self,
        weights: Option<&WeightVector>,
    ) -> Result<Schedule, BackendError> {
        let detail = weights
            .map(|w| format!("({},{},{})", w.throughput, w.risk, w.cost))
            .unwrap_or_default();
        self.record("optimize-schedule", detail)?;
        self.optimize_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(sample_schedule()))
    }
}

/// Lets a test keep inspecting the fake after handing it to an orchestrator.
#[async_trait]
impl Backend for Arc<FakeBackend> {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        (**self).health().await
    }

    async fn generate_data(&self) -> Result<GenerateDataAck, BackendError> {
        (**self).generate_data().await
    }

    async fn train_model(&self) -> Result<TrainingAck, BackendError> {
        (**self).train_model().await
    }

    async fn machines(&self) -> Result<Vec<MachineRecord>, BackendError> {
        (**self).machines().await
    }

    async fn high_risk_machines(&self) -> Result<Vec<MachineRiskRecord>, BackendError> {
        (**self).high_risk_machines().await
    }

    async fn simulate_maintenance(&self) -> Result<Vec<MaintenanceEvent>, BackendError> {
        (**self).simulate_maintenance().await
    }

    async fn jobs(&self) -> Result<Vec<JobRecord>, BackendError> {
        (**self).jobs().await
    }

    async fn optimize_schedule(
        &self,
        weights: Option<&WeightVector>,
    ) -> Result<Schedule, BackendError> {
        (**self).optimize_schedule(weights).await
    }
}
