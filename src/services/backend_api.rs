use std::env;
use std::fs;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::job::JobRecord;
use crate::domain::machine::{MachineRecord, MachineRiskRecord};
use crate::domain::maintenance::MaintenanceEvent;
use crate::domain::schedule::{MachineSchedule, Schedule, ScheduleJob};
use crate::domain::weights::{default_presets, ScenarioPreset, WeightVector};
use crate::services::backend::{
    Backend, BackendError, GenerateDataAck, HealthStatus, TrainingAck,
};

pub const BASE_URL_ENV: &str = "FLEETVIEW_BASE_URL";

/// Furthest offset from "now", in hours, a schedule job may sit at (about 100 years).
const MAX_SCHEDULE_HOURS: f64 = 24.0 * 366.0 * 100.0;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub weights: WeightVector,
    pub scenarios: Vec<ScenarioPreset>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 30,
            weights: WeightVector::default(),
            scenarios: default_presets(),
        }
    }
}

impl BackendConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, BackendError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| BackendError::Config(format!("failed to read config: {err}")))?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, BackendError> {
        let config: BackendConfig = serde_yaml::from_str(contents)
            .map_err(|err| BackendError::Config(format!("failed to parse config: {err}")))?;
        config.weights.validate().map_err(|err| BackendError::Config(err.to_string()))?;
        for preset in &config.scenarios {
            preset.weights.validate().map_err(|err| {
                BackendError::Config(format!("scenario `{}`: {err}", preset.name))
            })?;
        }
        Ok(config)
    }
}

pub struct ConfigParser;

impl ConfigParser {
    /// Loads the YAML config, letting `FLEETVIEW_BASE_URL` override `base_url`.
    pub fn parse(&self, filepath: &str) -> Result<BackendConfig, BackendError> {
        let mut config = BackendConfig::from_yaml_file(filepath)?;
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                config.base_url = base_url;
            }
        }
        Ok(config)
    }
}

pub struct BackendApiClient {
    base_url: String,
    client: Client,
}

impl BackendApiClient {
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        if config.base_url.trim().is_empty() {
            return Err(BackendError::Config(
                "backend config is missing base_url".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| BackendError::Config(format!("failed to build http client: {err}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn fetch_json(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, BackendError> {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "backend request");
        let response = self
            .client
            .request(method, &url)
            .query(params)
            .send()
            .await
            .map_err(|err| BackendError::Connection(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let payload = response.json::<Value>().await.map_err(|err| BackendError::Parse {
            endpoint: path.to_string(),
            reason: err.to_string(),
        })?;
        if let Some(message) = rejection_message(&payload) {
            return Err(BackendError::Rejected(message));
        }
        Ok(payload)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, BackendError> {
        let payload = self.fetch_json(method, path, params).await?;
        decode(path, payload)
    }
}

#[async_trait]
impl Backend for BackendApiClient {
    async fn health(&self) -> Result<HealthStatus, BackendError> {
        self.fetch(Method::GET, "/health", &[]).await
    }

    async fn generate_data(&self) -> Result<GenerateDataAck, BackendError> {
        self.fetch(Method::POST, "/generate-data", &[]).await
    }

    async fn train_model(&self) -> Result<TrainingAck, BackendError> {
        self.fetch(Method::POST, "/train-model", &[]).await
    }

    async fn machines(&self) -> Result<Vec<MachineRecord>, BackendError> {
        self.fetch(Method::GET, "/machines", &[]).await
    }

    async fn high_risk_machines(&self) -> Result<Vec<MachineRiskRecord>, BackendError> {
        self.fetch(Method::GET, "/high-risk-machines", &[]).await
    }

    async fn simulate_maintenance(&self) -> Result<Vec<MaintenanceEvent>, BackendError> {
        self.fetch(Method::GET, "/simulate-maintenance", &[]).await
    }

    async fn jobs(&self) -> Result<Vec<JobRecord>, BackendError> {
        self.fetch(Method::GET, "/jobs", &[]).await
    }

    async fn optimize_schedule(
        &self,
        weights: Option<&WeightVector>,
    ) -> Result<Schedule, BackendError> {
        let params: Vec<(&str, String)> = weights
            .map(|weights| weights.query_params().to_vec())
            .unwrap_or_default();
        let payload = self
            .fetch_json(Method::POST, "/optimize-schedule", &params)
            .await?;
        schedule_from_value(payload)
    }
}

fn rejection_message(payload: &Value) -> Option<String> {
    payload
        .as_object()
        .and_then(|object| object.get("error"))
        .map(|error| match error {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        })
}

fn decode<T: DeserializeOwned>(endpoint: &str, payload: Value) -> Result<T, BackendError> {
    serde_json::from_value(payload).map_err(|err| BackendError::Parse {
        endpoint: endpoint.to_string(),
        reason: err.to_string(),
    })
}

#[derive(Deserialize)]
struct ScheduleRecord {
    machine_schedules: serde_json::Map<String, Value>,
    #[serde(default)]
    unassigned_jobs: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct MachineScheduleRecord {
    #[serde(default)]
    schedule: Vec<ScheduleJobRecord>,
}

#[derive(Deserialize)]
struct ScheduleJobRecord {
    #[serde(alias = "Job_ID")]
    job_id: String,
    start: f64,
    end: f64,
    #[serde(default, alias = "Deadline_Hours")]
    deadline_hours: Option<f64>,
    #[serde(default, alias = "Revenue_Per_Job")]
    revenue: Option<f64>,
}

/// Validates an optimizer payload into a [`Schedule`], keeping the machine order
/// the backend sent.
pub(crate) fn schedule_from_value(payload: Value) -> Result<Schedule, BackendError> {
    const ENDPOINT: &str = "/optimize-schedule";
    let record: ScheduleRecord = decode(ENDPOINT, payload)?;

    let mut machine_schedules = Vec::with_capacity(record.machine_schedules.len());
    for (machine_id, value) in record.machine_schedules {
        let machine: MachineScheduleRecord = decode(ENDPOINT, value)?;
        let mut schedule = Vec::with_capacity(machine.schedule.len());
        for job in machine.schedule {
            if !job.start.is_finite() || !job.end.is_finite() || job.end < job.start {
                return Err(BackendError::Parse {
                    endpoint: ENDPOINT.to_string(),
                    reason: format!(
                        "job {} on {machine_id} ends at {} before it starts at {}",
                        job.job_id, job.end, job.start
                    ),
                });
            }
            if job.start.abs() > MAX_SCHEDULE_HOURS || job.end.abs() > MAX_SCHEDULE_HOURS {
                return Err(BackendError::Parse {
                    endpoint: ENDPOINT.to_string(),
                    reason: format!(
                        "job {} on {machine_id} lies outside the {MAX_SCHEDULE_HOURS} hour horizon",
                        job.job_id
                    ),
                });
            }
            schedule.push(ScheduleJob {
                job_id: job.job_id,
                start: job.start,
                end: job.end,
                deadline_hours: job.deadline_hours,
                revenue: job.revenue,
            });
        }
        machine_schedules.push(MachineSchedule {
            machine_id,
            schedule,
        });
    }

    Ok(Schedule {
        machine_schedules,
        unassigned_jobs: record.unassigned_jobs.unwrap_or_default(),
    })
}
