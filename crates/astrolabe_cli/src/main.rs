//! Command-line front end for the Astrolabe date engine.
//!
//! # Responsibility
//! - Drive engine operations from a shell for quick sanity checks.
//! - Keep output deterministic: one result per line on stdout.

mod cli;

use astrolabe_core::{init_logging, Date, DateError, DateUnit};
use clap::Parser;
use cli::{Cli, Command};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        if let Err(err) = init_logging(&cli.log_level, log_dir) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<Vec<String>, DateError> {
    info!("event=cli_command module=cli status=start command={command:?}");
    match command {
        Command::Today { format } => Ok(vec![Date::now().format(&format)?]),
        Command::Show { date, format } => Ok(vec![date.format(&format)?]),
        Command::Shift {
            date,
            amount,
            unit,
            clamp,
        } => {
            let shifted = if clamp {
                date.apply_clamped(amount, unit)?
            } else {
                date.apply(amount, unit)?
            };
            Ok(vec![shifted.to_string()])
        }
        Command::Set {
            date,
            value,
            unit,
            clamp,
        } => {
            let changed = if clamp {
                date.set_clamped(value, unit)?
            } else {
                date.set(value, unit)?
            };
            Ok(vec![changed.to_string()])
        }
        Command::Between { from, to } => Ok(vec![from.between(to).to_string()]),
        Command::Info { date } => Ok(describe(date)),
        Command::Version => Ok(vec![format!(
            "astrolabe_core version={}",
            astrolabe_core::core_version()
        )]),
    }
}

fn describe(date: Date) -> Vec<String> {
    vec![
        format!("date={date}"),
        format!("days={}", date.as_days()),
        format!("timestamp={}", date.timestamp()),
        format!("year={}", date.get(DateUnit::Year)),
        format!("month={}", date.get(DateUnit::Month)),
        format!("day={}", date.get(DateUnit::Day)),
        format!("weekday={}", date.weekday().name()),
        format!("day_of_year={}", date.day_of_year()),
        format!("leap_year={}", date.is_leap_year()),
    ]
}

#[cfg(test)]
mod tests {
    use super::{describe, run};
    use crate::cli::Cli;
    use clap::Parser;

    fn run_args(args: &[&str]) -> Result<Vec<String>, astrolabe_core::DateError> {
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        run(cli.command)
    }

    #[test]
    fn shift_rejects_missing_day_unless_clamped() {
        let err = run_args(&["astrolabe", "shift", "2024-01-31", "1", "month"]).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let lines =
            run_args(&["astrolabe", "shift", "2024-01-31", "1", "month", "--clamp"]).unwrap();
        assert_eq!(lines, vec!["2024-02-29".to_string()]);
    }

    #[test]
    fn shift_accepts_negative_amounts() {
        let lines = run_args(&["astrolabe", "shift", "2024-03-01", "-1", "day"]).unwrap();
        assert_eq!(lines, vec!["2024-02-29".to_string()]);
    }

    #[test]
    fn show_uses_custom_pattern() {
        let lines =
            run_args(&["astrolabe", "show", "2021-03-15", "--format", "d MMMM yyyy"]).unwrap();
        assert_eq!(lines, vec!["15 March 2021".to_string()]);
    }

    #[test]
    fn between_prints_distance() {
        let lines = run_args(&["astrolabe", "between", "2024-01-01", "2025-01-01"]).unwrap();
        assert_eq!(lines, vec!["366".to_string()]);
    }

    #[test]
    fn negative_year_dates_are_positionals() {
        let lines = run_args(&["astrolabe", "shift", "-0044-03-15", "1", "year"]).unwrap();
        assert_eq!(lines, vec!["-0043-03-15".to_string()]);

        let lines = run_args(&["astrolabe", "between", "-0001-12-31", "0001-01-01"]).unwrap();
        assert_eq!(lines, vec!["367".to_string()]);

        let lines = run_args(&["astrolabe", "info", "-0044-03-15"]).unwrap();
        assert!(lines.contains(&"year=-44".to_string()));
    }

    #[test]
    fn invalid_date_argument_is_a_parse_error() {
        assert!(Cli::try_parse_from(["astrolabe", "show", "2023-02-29"]).is_err());
    }

    #[test]
    fn describe_lists_all_views() {
        let date = "1970-01-01".parse().unwrap();
        let lines = describe(date);
        assert!(lines.contains(&"days=719162".to_string()));
        assert!(lines.contains(&"timestamp=0".to_string()));
        assert!(lines.contains(&"weekday=Thursday".to_string()));
    }
}
