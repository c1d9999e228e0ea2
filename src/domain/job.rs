use serde::{Deserialize, Serialize};

/// Production job as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job_ID")]
    pub job_id: String,
    #[serde(rename = "Required_Machine_Type")]
    pub required_machine_type: String,
    #[serde(rename = "Processing_Time_Hours")]
    pub processing_time_hours: f64,
    #[serde(rename = "Priority_Level", default)]
    pub priority_level: Option<u32>,
    #[serde(rename = "Deadline_Hours")]
    pub deadline_hours: f64,
    #[serde(rename = "Revenue_Per_Job", default)]
    pub revenue: Option<f64>,
}
