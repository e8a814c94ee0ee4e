use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

use fitcalc_core::session::Session;
use fitcalc_core::workout::MAX_WORKOUT_DAYS;

use super::helpers::Prompter;
use super::profile::{collect_profile, profile_summary};
use super::weight::{log_weight, view_weight_logs};
use super::workout::generate_workout_plan;

const MENU: &[&str] = &[
    "1. Log weight and calories",
    "2. View weight logs",
    "3. Generate workout plan",
    "4. Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    LogWeight,
    ViewLogs,
    WorkoutPlan,
    Quit,
}

impl MenuChoice {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::LogWeight),
            2 => Some(Self::ViewLogs),
            3 => Some(Self::WorkoutPlan),
            4 => Some(Self::Quit),
            _ => None,
        }
    }
}

pub(crate) fn cmd_shell() -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    run_shell(&mut prompter)?;
    Ok(())
}

/// Collect the profile, then serve the main menu until the user quits.
/// Returns the session as it stood on exit.
pub(crate) fn run_shell<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Session> {
    let profile = collect_profile(p)?;
    p.say_all(&profile_summary(&profile))?;
    let mut session = Session::new(profile);

    loop {
        p.say("\nOptions:")?;
        for item in MENU {
            p.say(item)?;
        }
        let choice = p.ask_choice("Enter your choice (1, 2, 3, or 4): ")?;
        debug!(choice, "menu selection");

        match MenuChoice::from_choice(choice) {
            Some(MenuChoice::LogWeight) => log_weight(p, &mut session)?,
            Some(MenuChoice::ViewLogs) => view_weight_logs(p, &session)?,
            Some(MenuChoice::WorkoutPlan) => {
                let days = p.ask_choice("Enter the number of workout days per week (1-6): ")?;
                match u32::try_from(days) {
                    Ok(d) if (1..=MAX_WORKOUT_DAYS).contains(&d) => generate_workout_plan(p, d)?,
                    _ => p.say("Invalid input. Please enter a number between 1 and 6.")?,
                }
            }
            Some(MenuChoice::Quit) => {
                p.say("Goodbye!")?;
                return Ok(session);
            }
            None => p.say("Invalid choice. Please try again.")?,
        }
    }
}
