use std::process::ExitCode;

use thiserror::Error;

use crate::commands::report_format::format_fleet_projection;
use crate::domain::weights::{WeightError, WeightVector};
use crate::services::risk_projection::{project_fleet, FleetKpis};

#[derive(Error, Debug, PartialEq)]
pub enum ProjectionError {
    #[error("bucket counts {sum} do not add up to total {total}")]
    Unbalanced { sum: usize, total: usize },
    #[error(transparent)]
    Weights(#[from] WeightError),
}

pub(crate) fn checked_projection(
    baseline: FleetKpis,
    weights: WeightVector,
) -> Result<FleetKpis, ProjectionError> {
    let sum = baseline.healthy + baseline.warning + baseline.high_risk;
    if sum != baseline.total {
        return Err(ProjectionError::Unbalanced {
            sum,
            total: baseline.total,
        });
    }
    weights.validate()?;
    Ok(project_fleet(&baseline, &weights))
}

pub fn project_command(baseline: FleetKpis, weights: WeightVector) -> ExitCode {
    match checked_projection(baseline, weights) {
        Ok(projected) => {
            println!("{}", format_fleet_projection(&baseline, &projected));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to project fleet: {e}");
            ExitCode::FAILURE
        }
    }
}
