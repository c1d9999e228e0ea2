use std::process::ExitCode;

use crate::commands::connect;
use crate::services::backend::Backend;

pub async fn health_command(config: &str) -> ExitCode {
    let (config, client) = match connect(config) {
        Ok(connected) => connected,
        Err(e) => {
            eprintln!("Failed to set up backend client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match client.health().await {
        Ok(health) => {
            println!("Backend at {} is {}", config.base_url, health.status);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Backend at {} is unavailable ({}): {e}", config.base_url, e.kind());
            ExitCode::FAILURE
        }
    }
}
