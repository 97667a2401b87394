use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sigbench::descriptor::{DEFAULT_FIXTURE, PARAM_COUNT_END, PARAM_COUNT_START};

/// sigbench - descriptor fixture generation, inspection, and verification
#[derive(Debug, Parser)]
#[command(name = "sigbench", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a descriptor fixture with randomized methods.
    Gen {
        /// Path of the fixture file to write.
        #[arg(value_name = "FILE", default_value = DEFAULT_FIXTURE)]
        output: PathBuf,

        /// First parameter count to generate (inclusive).
        #[arg(long, default_value_t = PARAM_COUNT_START)]
        start: usize,

        /// Last parameter count to generate (inclusive).
        #[arg(long, default_value_t = PARAM_COUNT_END)]
        end: usize,

        /// Seed for a reproducible fixture. Without it, seeding uses OS entropy.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the methods stored in a fixture.
    Methods {
        /// Path to the fixture file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Show rendered signatures alongside parameter counts.
        #[arg(long)]
        signatures: bool,
    },

    /// Show a single method descriptor in detail.
    Show {
        /// Path to the fixture file.
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// The method name to show (e.g., RandomMethod_3).
        #[arg(value_name = "METHOD")]
        method: String,
    },

    /// Rebuild every fixture entry and check that all rendering strategies agree.
    Verify {
        /// Path to the fixture file.
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
}
