//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use sp_core::Subject;

use crate::commands::util::{parse_hours, parse_subject};

/// Smart study planner.
///
/// Splits the time you have today between your subjects by difficulty and
/// lays it out as a schedule with short breaks.
#[derive(Debug, Parser)]
#[command(name = "sp", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a plan from arguments.
    Plan {
        /// Hours available today (e.g., 4.5 or 4,5).
        #[arg(long, value_parser = parse_hours)]
        hours: f64,

        /// A subject and its difficulty, as NAME=easy|medium|hard. Repeatable.
        #[arg(short, long = "subject", value_parser = parse_subject, required = true)]
        subjects: Vec<Subject>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,

        /// Clock time of the first block (HH:MM). Overrides the config file.
        #[arg(long)]
        start: Option<String>,
    },

    /// Answer prompts to build a plan.
    Interactive {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use sp_core::Difficulty;

    #[test]
    fn test_plan_arguments_parse() {
        let cli = Cli::try_parse_from([
            "sp", "plan", "--hours", "2,5", "-s", "Math=hard", "-s", "Art=easy", "--json",
        ])
        .unwrap();

        let Some(Commands::Plan {
            hours,
            subjects,
            json,
            start,
        }) = cli.command
        else {
            panic!("expected plan command");
        };
        assert!((hours - 2.5).abs() < f64::EPSILON);
        assert_eq!(subjects.len(), 2);
        assert_eq!(subjects[0].difficulty, Difficulty::Hard);
        assert!(json);
        assert!(start.is_none());
    }

    #[test]
    fn test_plan_requires_a_subject() {
        assert!(Cli::try_parse_from(["sp", "plan", "--hours", "2"]).is_err());
    }

    #[test]
    fn test_plan_rejects_bad_difficulty() {
        assert!(Cli::try_parse_from(["sp", "plan", "--hours", "2", "-s", "Math=scary"]).is_err());
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["sp", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
