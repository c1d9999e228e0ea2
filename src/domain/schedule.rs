use serde::Serialize;

/// A job placed on a machine. Times are hours from "now".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleJob {
    pub job_id: String,
    pub start: f64,
    pub end: f64,
    pub deadline_hours: Option<f64>,
    pub revenue: Option<f64>,
}

impl ScheduleJob {
    pub fn duration_hours(&self) -> f64 {
        self.end - self.start
    }

    /// A job without a known deadline cannot be shown to meet it.
    pub fn is_on_time(&self) -> bool {
        self.deadline_hours
            .is_some_and(|deadline| self.end <= deadline)
    }
}

/// Jobs assigned to one machine, in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MachineSchedule {
    pub machine_id: String,
    pub schedule: Vec<ScheduleJob>,
}

/// Optimizer output. `machine_schedules` keeps the backend's machine order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule {
    pub machine_schedules: Vec<MachineSchedule>,
    pub unassigned_jobs: Vec<String>,
}

impl Schedule {
    pub fn scheduled_job_count(&self) -> usize {
        self.machine_schedules
            .iter()
            .map(|machine| machine.schedule.len())
            .sum()
    }
}
