use serde::Serialize;

use crate::domain::maintenance::MaintenanceEvent;

/// Fleet totals for preventive-now versus run-to-failure maintenance.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MaintenanceSummary {
    pub machines: usize,
    pub immediate_cost: f64,
    pub delayed_cost: f64,
    pub immediate_downtime: f64,
    pub delayed_downtime: f64,
    pub immediate_production_loss: f64,
    pub delayed_production_loss: f64,
    /// `delayed_cost - immediate_cost`; positive when acting now is cheaper.
    pub preventive_savings: f64,
    pub machines_favoring_preventive: usize,
}

pub fn summarize_maintenance(events: &[MaintenanceEvent]) -> MaintenanceSummary {
    let mut summary = MaintenanceSummary {
        machines: events.len(),
        ..MaintenanceSummary::default()
    };
    for event in events {
        summary.immediate_cost += event.immediate.cost;
        summary.delayed_cost += event.delayed.cost;
        summary.immediate_downtime += event.immediate.downtime;
        summary.delayed_downtime += event.delayed.downtime;
        summary.immediate_production_loss += event.immediate.production_loss;
        summary.delayed_production_loss += event.delayed.production_loss;
        if event.immediate.cost < event.delayed.cost {
            summary.machines_favoring_preventive += 1;
        }
    }
    summary.preventive_savings = summary.delayed_cost - summary.immediate_cost;
    summary
}
