pub mod base_commands;
pub mod dashboard_cmd;
pub mod health_cmd;
pub mod machines_cmd;
pub mod project_cmd;
pub mod recompute_cmd;
pub mod report_format;
pub mod scenarios_cmd;

use crate::services::backend::BackendError;
use crate::services::backend_api::{BackendApiClient, BackendConfig, ConfigParser};

pub(crate) fn connect(config_path: &str) -> Result<(BackendConfig, BackendApiClient), BackendError> {
    let config = ConfigParser.parse(config_path)?;
    let client = BackendApiClient::new(&config)?;
    Ok((config, client))
}
