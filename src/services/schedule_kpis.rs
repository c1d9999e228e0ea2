use serde::Serialize;

use crate::domain::schedule::Schedule;

/// Flat totals for the schedule header cards.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScheduleKpis {
    pub total_scheduled: usize,
    pub unassigned_count: usize,
    pub on_time_count: usize,
    pub late_count: usize,
    pub total_revenue: f64,
    pub avg_utilization_hours: f64,
}

/// Reduces a schedule to its header totals.
///
/// Deadlines and revenue come only from the schedule's own jobs. The live
/// optimizer sends just `Job_ID`, `start` and `end`, so against it every job
/// counts as late and revenue stays 0 even though `/jobs` lists both figures.
pub fn aggregate_schedule(schedule: &Schedule) -> ScheduleKpis {
    let mut kpis = ScheduleKpis {
        unassigned_count: schedule.unassigned_jobs.len(),
        ..ScheduleKpis::default()
    };

    let mut busy_hours = 0.0_f64;
    for machine in &schedule.machine_schedules {
        let mut machine_busy_hours = 0.0_f64;
        for job in &machine.schedule {
            kpis.total_scheduled += 1;
            machine_busy_hours += job.duration_hours();
            if job.is_on_time() {
                kpis.on_time_count += 1;
            } else {
                kpis.late_count += 1;
            }
            kpis.total_revenue += job.revenue.unwrap_or(0.0);
        }
        busy_hours += machine_busy_hours;
    }

    let machine_count = schedule.machine_schedules.len();
    if machine_count > 0 {
        kpis.avg_utilization_hours = round_to_tenth(busy_hours / machine_count as f64);
    }
    kpis
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
