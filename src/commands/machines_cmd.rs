use std::process::ExitCode;

use crate::commands::connect;
use crate::services::backend::Backend;

pub async fn machines_command(config: &str, output: &str) -> ExitCode {
    let (_, client) = match connect(config) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("Failed to set up backend client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let machines = match client.machines().await {
        Ok(machines) => machines,
        Err(e) => {
            eprintln!("Failed to fetch machines: {e}");
            return ExitCode::FAILURE;
        }
    };

    let yaml = match serde_yaml::to_string(&machines) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize machines: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = tokio::fs::write(output, yaml).await {
        eprintln!("Failed to write output file: {e}");
        return ExitCode::FAILURE;
    }
    println!("Data for {} machines written to {output}", machines.len());
    ExitCode::SUCCESS
}
