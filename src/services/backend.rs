use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::job::JobRecord;
use crate::domain::machine::{MachineRecord, MachineRiskRecord};
use crate::domain::maintenance::MaintenanceEvent;
use crate::domain::schedule::Schedule;
use crate::domain::weights::WeightVector;

#[derive(Error, Debug)]
pub enum BackendError {
    /// Backend unreachable.
    #[error("connection error: {0}")]
    Connection(String),
    /// Backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),
    /// Response is missing expected fields or violates a record invariant.
    #[error("malformed response from {endpoint}: {reason}")]
    Parse { endpoint: String, reason: String },
    /// Backend answered `{"error": ...}`, e.g. when training has not run yet.
    #[error("backend rejected request: {0}")]
    Rejected(String),
    #[error("{0}")]
    Config(String),
}

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Connection(_) | BackendError::Status(_) => "NetworkFailure",
            BackendError::Parse { .. } => "MalformedResponse",
            BackendError::Rejected(_) => "BackendRejected",
            BackendError::Config(_) => "Configuration",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateDataAck {
    pub message: String,
    pub machines: usize,
    pub jobs: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingMetrics {
    pub accuracy: f64,
    pub f1_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingAck {
    pub message: String,
    pub metrics: Option<TrainingMetrics>,
}

/// Request/response contract of the optimization backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn health(&self) -> Result<HealthStatus, BackendError>;
    async fn generate_data(&self) -> Result<GenerateDataAck, BackendError>;
    async fn train_model(&self) -> Result<TrainingAck, BackendError>;
    async fn machines(&self) -> Result<Vec<MachineRecord>, BackendError>;
    async fn high_risk_machines(&self) -> Result<Vec<MachineRiskRecord>, BackendError>;
    async fn simulate_maintenance(&self) -> Result<Vec<MaintenanceEvent>, BackendError>;
    async fn jobs(&self) -> Result<Vec<JobRecord>, BackendError>;
    /// `None` lets the backend apply its own default weights.
    async fn optimize_schedule(
        &self,
        weights: Option<&WeightVector>,
    ) -> Result<Schedule, BackendError>;
}
