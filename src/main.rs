mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::dashboard_cmd::dashboard_command;
use crate::commands::health_cmd::health_command;
use crate::commands::machines_cmd::machines_command;
use crate::commands::project_cmd::project_command;
use crate::commands::recompute_cmd::recompute_command;
use crate::commands::scenarios_cmd::scenarios_command;
use crate::domain::weights::WeightVector;
use crate::services::risk_projection::FleetKpis;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let args = CliArgs::parse();
    match args.command {
        Commands::Dashboard {
            config,
            output,
            throughput,
            risk,
            cost,
        } => dashboard_command(&config, &output, throughput, risk, cost).await,
        Commands::Recompute {
            config,
            output,
            throughput,
            risk,
            cost,
        } => recompute_command(&config, &output, throughput, risk, cost).await,
        Commands::Scenarios { config, output } => scenarios_command(&config, &output).await,
        Commands::Project {
            total,
            healthy,
            warning,
            high_risk,
            throughput,
            risk,
            cost,
        } => project_command(
            FleetKpis {
                total,
                healthy,
                warning,
                high_risk,
            },
            WeightVector::new(throughput, risk, cost),
        ),
        Commands::Machines { config, output } => machines_command(&config, &output).await,
        Commands::Health { config } => health_command(&config).await,
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
