use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check in, take breaks, check out and get weekly reports; state is stored encrypted on disk",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the encryption key file
    #[arg(global = true, long = "key-file")]
    pub key_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, encryption key and database
    Init,

    /// Check in and start today's session
    In,

    /// Start or end a break
    Break {
        #[command(subcommand)]
        action: BreakAction,
    },

    /// Check out and record the day in the history
    Out {
        /// Productivity score stored with the day
        #[arg(long = "efficiency", default_value_t = 100.0, value_parser = parse_efficiency)]
        efficiency: f64,

        #[arg(long = "notes", help = "Free-text notes for the day")]
        notes: Option<String>,
    },

    /// Show the current session
    Status,

    /// List recorded days, newest first
    History {
        #[arg(long, short, help = "Show at most N days")]
        limit: Option<usize>,
    },

    /// Weekly summary of the recorded days
    Report {
        #[arg(
            long = "week",
            value_name = "YYYY-MM-DD",
            help = "First day of the week (default: Monday of the current week)"
        )]
        week: Option<String>,
    },

    /// Export the history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Erase the current session and the whole history
    Clear,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}

#[derive(Subcommand)]
pub enum BreakAction {
    /// Start a break
    Start {
        #[arg(long = "reason")]
        reason: Option<String>,
    },
    /// End the running break
    End,
}

/// Finite numbers only; `NaN`/`inf` would not survive the history slot.
fn parse_efficiency(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(format!("'{s}' is not a finite number"))
    }
}
