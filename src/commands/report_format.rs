use crate::services::dashboard_view::DashboardSnapshot;
use crate::services::risk_projection::FleetKpis;
use crate::services::scenario_runner::ScenarioResult;

pub fn format_dashboard_report(snapshot: &DashboardSnapshot) -> String {
    let kpis = &snapshot.schedule_kpis;
    let weights = &snapshot.weights;

    let mut lines = Vec::new();
    lines.push("Dashboard Report".to_string());
    lines.push(format!(
        "Weights: throughput {:.2}, risk {:.2}, cost {:.2}",
        weights.throughput, weights.risk, weights.cost
    ));
    if let Some(metrics) = snapshot.training_metrics {
        lines.push(format!(
            "Model: accuracy {:.2}, f1 {:.2}",
            metrics.accuracy, metrics.f1_score
        ));
    }
    lines.push(String::new());
    lines.push("Schedule:".to_string());
    lines.push(format!("Scheduled jobs: {}", kpis.total_scheduled));
    lines.push(format!("Unassigned jobs: {}", kpis.unassigned_count));
    lines.push(format!("On time: {} | Late: {}", kpis.on_time_count, kpis.late_count));
    lines.push(format!("Revenue: {:.2}", kpis.total_revenue));
    lines.push(format!("Avg utilization: {:.1} h", kpis.avg_utilization_hours));
    lines.push(String::new());
    lines.push(format_fleet_projection(
        &snapshot.fleet_kpis,
        &snapshot.projected_fleet_kpis,
    ));
    if !snapshot.scenarios.is_empty() {
        lines.push(String::new());
        lines.push(format_scenario_table(&snapshot.scenarios));
    }
    if snapshot.maintenance.machines > 0 {
        let maintenance = &snapshot.maintenance;
        lines.push(String::new());
        lines.push(format!(
            "Maintenance: immediate {:.2} vs delayed {:.2} (savings {:.2}, {} of {} machines favor preventive)",
            maintenance.immediate_cost,
            maintenance.delayed_cost,
            maintenance.preventive_savings,
            maintenance.machines_favoring_preventive,
            maintenance.machines
        ));
    }
    if let Some(failure) = &snapshot.failure {
        lines.push(String::new());
        lines.push(format!(
            "Failed at {} ({}): {}",
            failure.stage, failure.kind, failure.message
        ));
    }

    lines.join("\n")
}

pub fn format_fleet_projection(baseline: &FleetKpis, projected: &FleetKpis) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Fleet ({} machines):", baseline.total));
    lines.push("Bucket | Baseline | Projected".to_string());
    lines.push("-------|----------|----------".to_string());
    lines.push(format!("Healthy | {} | {}", baseline.healthy, projected.healthy));
    lines.push(format!("Warning | {} | {}", baseline.warning, projected.warning));
    lines.push(format!("High Risk | {} | {}", baseline.high_risk, projected.high_risk));
    lines.join("\n")
}

pub fn format_scenario_table(results: &[ScenarioResult]) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario | Scheduled | Unassigned".to_string());
    lines.push("---------|-----------|-----------".to_string());
    for result in results {
        lines.push(format!(
            "{} | {} | {}",
            result.scenario_name, result.scheduled_count, result.unassigned_count
        ));
    }
    lines.join("\n")
}
