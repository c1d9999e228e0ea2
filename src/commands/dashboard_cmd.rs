use std::process::ExitCode;

use chrono::Utc;

use crate::commands::connect;
use crate::commands::report_format::format_dashboard_report;
use crate::services::dashboard_view::{serialize_snapshot_to_yaml, DashboardSnapshot};
use crate::services::pipeline::PipelineOrchestrator;

pub async fn dashboard_command(
    config: &str,
    output: &str,
    throughput: Option<f64>,
    risk: Option<f64>,
    cost: Option<f64>,
) -> ExitCode {
    let (config, client) = match connect(config) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("Failed to set up backend client: {e}");
            return ExitCode::FAILURE;
        }
    };
    let weights = config.weights.with_overrides(throughput, risk, cost);
    if let Err(e) = weights.validate() {
        eprintln!("Invalid weights: {e}");
        return ExitCode::FAILURE;
    }

    let mut orchestrator = PipelineOrchestrator::new(Box::new(client), config.scenarios, weights);
    let outcome = orchestrator.run().await;

    // Written either way: a failed run still shows what earlier stages produced.
    let snapshot = DashboardSnapshot::build(orchestrator.state(), Utc::now());
    let mut buffer = Vec::new();
    if let Err(e) = serialize_snapshot_to_yaml(&mut buffer, &snapshot) {
        eprintln!("Failed to serialize dashboard snapshot: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = tokio::fs::write(output, buffer).await {
        eprintln!("Failed to write output file: {e}");
        return ExitCode::FAILURE;
    }
    println!("{}", format_dashboard_report(&snapshot));

    match outcome {
        Ok(()) => {
            println!("Dashboard snapshot written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Dashboard pipeline failed: {e}");
            eprintln!("Partial dashboard snapshot written to {output}");
            ExitCode::FAILURE
        }
    }
}
