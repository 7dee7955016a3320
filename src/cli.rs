use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// INDB Diet Pro — diet-plan generation over a synthetic food table, plus a
/// keyword-routed chat assistant.
#[derive(Parser, Debug)]
#[command(name = "indb-diet-pro")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog size.
    #[arg(long, default_value = "1014")]
    pub catalog_size: usize,

    /// Catalog generation seed.
    #[arg(long, default_value = "42")]
    pub seed: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a diet plan from an interactive profile.
    Plan {
        /// Write the resulting plan to this JSON file.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Inspect or export the synthetic food catalog.
    Catalog {
        /// Export the catalog as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Export the catalog as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Chat with the keyword-routed assistant (offline lookups).
    Chat {
        /// Chat memory file.
        #[arg(long, default_value = "memory.json")]
        memory: PathBuf,

        /// Keyword->answer table for tech questions.
        #[arg(long, default_value = "programming.json")]
        tech: PathBuf,
    },

    /// Measure solver constraint-satisfaction rates per goal.
    Calibrate {
        /// Solver runs per goal.
        #[arg(long, default_value = "200")]
        runs: usize,

        /// Seed for profile generation and solver sampling.
        #[arg(long, default_value = "123")]
        calibration_seed: u64,

        /// Write per-goal stats to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { out: None }
    }
}
