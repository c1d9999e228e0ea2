use serde::{Deserialize, Serialize};

/// Discretization of a continuous health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Healthy,
    Warning,
    #[serde(rename = "High Risk")]
    HighRisk,
}

/// One row of the risk snapshot. Snapshots are replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRiskRecord {
    #[serde(rename = "Machine_ID", alias = "machine_id")]
    pub machine_id: String,
    pub health_score: f64,
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_probability: Option<f64>,
}

/// Machine master data as generated by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineRecord {
    #[serde(rename = "Machine_ID")]
    pub machine_id: String,
    #[serde(rename = "Machine_Type")]
    pub machine_type: String,
    #[serde(rename = "Machine_Age", default)]
    pub machine_age: Option<u32>,
    #[serde(rename = "Avg_Temperature", default)]
    pub avg_temperature: Option<f64>,
    #[serde(rename = "Avg_Vibration", default)]
    pub avg_vibration: Option<f64>,
    #[serde(rename = "Capacity_Per_Hour", default)]
    pub capacity_per_hour: Option<f64>,
    #[serde(rename = "Last_Maintenance_Days", default)]
    pub last_maintenance_days: Option<u32>,
    #[serde(rename = "Failure_History_Count", default)]
    pub failure_history_count: Option<u32>,
}
