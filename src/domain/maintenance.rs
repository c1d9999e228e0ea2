use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceOutcome {
    pub cost: f64,
    pub downtime: f64,
    pub production_loss: f64,
}

/// Preventive-now versus run-to-failure comparison for one machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceEvent {
    #[serde(rename = "Machine_ID")]
    pub machine_id: String,
    pub immediate: MaintenanceOutcome,
    pub delayed: MaintenanceOutcome,
}
