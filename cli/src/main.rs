mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

use crate::commands::{cmd_bmr, cmd_plan, cmd_shell};
use crate::config::Config;

#[derive(Parser)]
#[command(
    name = "fitcalc",
    version,
    about = "A fitness calculator: daily calorie target, weight log and 12-week workout plans",
    long_about = "Runs an interactive session when no subcommand is given: enter your \
                  measurements, get a Mifflin-St Jeor calorie target, log weight and \
                  calories, and print a 12-week workout plan."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session (default)
    Shell,
    /// Compute a daily calorie target without prompting
    Bmr {
        /// Age in years
        #[arg(long)]
        age: i32,
        /// Gender: M selects the male formula, anything else the female one
        #[arg(long)]
        gender: String,
        /// Height, whole feet
        #[arg(long)]
        feet: i32,
        /// Height, remaining inches
        #[arg(long, default_value = "0")]
        inches: i32,
        /// Weight in pounds
        #[arg(long)]
        pounds: f64,
        /// Weight goal: lose, maintain, gain
        #[arg(short, long, default_value = "maintain")]
        goal: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the pre-defined 12-week workout rotation
    Plan {
        /// Workout days per week (1-6)
        #[arg(short, long, default_value = "3")]
        days: u32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    Config::load(cli.verbose).init_logging();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => cmd_shell(),
        Commands::Bmr {
            age,
            gender,
            feet,
            inches,
            pounds,
            goal,
            json,
        } => cmd_bmr(age, &gender, feet, inches, pounds, &goal, json),
        Commands::Plan { days, json } => cmd_plan(days, json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_shell() {
        let cli = Cli::try_parse_from(["fitcalc"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_bmr() {
        let cli = Cli::try_parse_from([
            "fitcalc", "bmr", "--age", "25", "--gender", "M", "--feet", "5", "--inches", "9",
            "--pounds", "150", "-g", "gain", "--json", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Some(Commands::Bmr {
                age, goal, json, ..
            }) => {
                assert_eq!(age, 25);
                assert_eq!(goal, "gain");
                assert!(json);
            }
            _ => panic!("expected bmr subcommand"),
        }
    }

    #[test]
    fn test_parse_plan_default_days() {
        let cli = Cli::try_parse_from(["fitcalc", "plan"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Plan {
                days: 3,
                json: false
            })
        ));
    }
}
