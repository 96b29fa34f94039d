use astrolabe_core::{default_log_level, Date, DateUnit, DEFAULT_PATTERN};
use clap::{Parser, Subcommand};

/// Astrolabe calendar date tool.
#[derive(Debug, Parser)]
#[command(name = "astrolabe", version, about = "Proleptic Gregorian date calculator")]
pub struct Cli {
    /// Absolute directory for rotating log files; logging is off when unset.
    #[arg(long, global = true, env = "ASTROLABE_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true, env = "ASTROLABE_LOG_LEVEL", default_value_t = default_log_level().to_string())]
    pub log_level: String,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print today's UTC date.
    Today {
        /// Output pattern.
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        format: String,
    },
    /// Render a YYYY-MM-DD date with a pattern.
    Show {
        #[arg(allow_hyphen_values = true)]
        date: Date,
        /// Output pattern.
        #[arg(short, long, default_value = DEFAULT_PATTERN)]
        format: String,
    },
    /// Shift a date by a signed amount of years, months or days.
    Shift {
        #[arg(allow_hyphen_values = true)]
        date: Date,
        #[arg(allow_hyphen_values = true)]
        amount: i32,
        unit: DateUnit,
        /// Clamp a missing day to the end of the target month.
        #[arg(long)]
        clamp: bool,
    },
    /// Replace the year, month or day of a date.
    Set {
        #[arg(allow_hyphen_values = true)]
        date: Date,
        #[arg(allow_hyphen_values = true)]
        value: i32,
        unit: DateUnit,
        /// Clamp a missing day to the end of the target month.
        #[arg(long)]
        clamp: bool,
    },
    /// Print the distance in days between two dates.
    Between {
        #[arg(allow_hyphen_values = true)]
        from: Date,
        #[arg(allow_hyphen_values = true)]
        to: Date,
    },
    /// Print every view of a date.
    Info {
        #[arg(allow_hyphen_values = true)]
        date: Date,
    },
    /// Print the engine version.
    Version,
}
