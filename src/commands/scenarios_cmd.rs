use std::process::ExitCode;

use crate::commands::connect;
use crate::commands::report_format::format_scenario_table;
use crate::services::scenario_runner::{run_scenarios, ScenarioResult};

pub async fn scenarios_command(config: &str, output: &str) -> ExitCode {
    let (config, client) = match connect(config) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("Failed to set up backend client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (results, failure) = match run_scenarios(&client, &config.scenarios).await {
        Ok(results) => (results, None),
        Err(e) => {
            let message = e.to_string();
            (e.completed, Some(message))
        }
    };

    if let Err(e) = write_results(output, &results).await {
        eprintln!("Failed to write scenario results: {e}");
        return ExitCode::FAILURE;
    }
    println!("{}", format_scenario_table(&results));

    match failure {
        None => {
            println!("Scenario results for {} presets written to {output}", results.len());
            ExitCode::SUCCESS
        }
        Some(message) => {
            eprintln!("Scenario comparison aborted: {message}");
            eprintln!("Partial scenario results written to {output}");
            ExitCode::FAILURE
        }
    }
}

async fn write_results(output: &str, results: &[ScenarioResult]) -> Result<(), String> {
    let yaml = serde_yaml::to_string(results).map_err(|e| e.to_string())?;
    tokio::fs::write(output, yaml)
        .await
        .map_err(|e| e.to_string())
}
