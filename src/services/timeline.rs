use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::domain::schedule::Schedule;

const MILLIS_PER_HOUR: f64 = 3600.0 * 1000.0;

/// Absolute-time bar for the schedule timeline.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TimelineTask {
    /// `{machine_id}_{index within machine}`
    pub id: String,
    pub name: String,
    pub machine_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Anchors every scheduled job to `now`, machine-major then in job order.
pub fn build_timeline(schedule: &Schedule, now: DateTime<Utc>) -> Vec<TimelineTask> {
    let mut tasks = Vec::with_capacity(schedule.scheduled_job_count());
    for machine in &schedule.machine_schedules {
        for (index, job) in machine.schedule.iter().enumerate() {
            tasks.push(TimelineTask {
                id: format!("{}_{index}", machine.machine_id),
                name: job.job_id.clone(),
                machine_id: machine.machine_id.clone(),
                start: offset(now, job.start),
                end: offset(now, job.end),
            });
        }
    }
    tasks
}

/// `now + hours`, pinned to the representable range instead of overflowing.
fn offset(now: DateTime<Utc>, hours: f64) -> DateTime<Utc> {
    let limit = if hours < 0.0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    Duration::try_milliseconds((hours * MILLIS_PER_HOUR).round() as i64)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(limit)
}
