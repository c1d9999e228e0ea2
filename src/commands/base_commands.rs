use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full backend pipeline and write the dashboard snapshot as YAML
    Dashboard {
        /// Path to backend config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Throughput weight, overrides the config
        #[arg(long)]
        throughput: Option<f64>,
        /// Risk weight, overrides the config
        #[arg(long)]
        risk: Option<f64>,
        /// Cost weight, overrides the config
        #[arg(long)]
        cost: Option<f64>,
    },
    /// Re-optimize the schedule for new weights without rerunning the pipeline
    Recompute {
        /// Path to backend config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        #[arg(long)]
        throughput: Option<f64>,
        #[arg(long)]
        risk: Option<f64>,
        #[arg(long)]
        cost: Option<f64>,
    },
    /// Compare the configured weight presets
    Scenarios {
        /// Path to backend config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Project fleet risk buckets for a weight vector, offline
    Project {
        #[arg(long)]
        total: usize,
        #[arg(long)]
        healthy: usize,
        #[arg(long)]
        warning: usize,
        #[arg(long)]
        high_risk: usize,
        #[arg(long, default_value_t = 0.4)]
        throughput: f64,
        #[arg(long, default_value_t = 0.3)]
        risk: f64,
        #[arg(long, default_value_t = 0.3)]
        cost: f64,
    },
    /// Fetch machine master data and serialize to YAML
    Machines {
        /// Path to backend config YAML
        #[arg(short, long)]
        config: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Check that the backend is reachable
    Health {
        /// Path to backend config YAML
        #[arg(short, long)]
        config: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
