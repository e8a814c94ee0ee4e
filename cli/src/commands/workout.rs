use anyhow::Result;
use std::io::{BufRead, Write};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};
use tracing::info;

use fitcalc_core::models::Exercise;
use fitcalc_core::workout::{
    CustomPlan, PLAN_WEEKS, fixed_plan, render_custom_plan, render_fixed_plan,
    validate_workout_days,
};

use super::helpers::Prompter;

/// Ask for the plan mode, re-prompting until it is 1 (fixed) or 2 (custom).
pub(crate) fn generate_workout_plan<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    workout_days: u32,
) -> Result<()> {
    loop {
        let choice =
            p.ask_choice("Enter 1 to use the pre-defined workout plan or 2 to create your own: ")?;
        match choice {
            1 => {
                info!(workout_days, "generated fixed workout plan");
                return p.say_all(&render_fixed_plan(workout_days));
            }
            2 => {
                let plan = create_custom_plan(p, workout_days)?;
                info!(days = plan.day_count(), "generated custom workout plan");
                return p.say_all(&render_custom_plan(&plan));
            }
            _ => p.say("Invalid choice. Please try again.")?,
        }
    }
}

fn create_custom_plan<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    workout_days: u32,
) -> Result<CustomPlan> {
    let mut plan = CustomPlan::new();
    for week in 1..=PLAN_WEEKS {
        for day in 1..=workout_days {
            p.say(&format!("\nWeek {week}, Day {day}:"))?;
            let count: i64 = p.ask_parsed("Enter the number of exercises for this day: ")?;
            let mut exercises = Vec::new();
            for i in 1..=count {
                p.say(&format!("\nExercise {i}:"))?;
                let exercise = p.ask("Enter the exercise: ")?;
                let sets = p.ask_parsed("Enter the number of sets: ")?;
                let reps = p.ask_parsed("Enter the number of reps: ")?;
                exercises.push(Exercise {
                    exercise,
                    sets,
                    reps,
                });
            }
            plan.push_day(week, exercises);
        }
    }
    Ok(plan)
}

pub(crate) fn cmd_plan(days: u32, json: bool) -> Result<()> {
    let days = validate_workout_days(days)?;
    let plan = fixed_plan(days);

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    #[derive(Tabled)]
    struct PlanRow {
        #[tabled(rename = "Week")]
        week: u32,
        #[tabled(rename = "Day")]
        day: u32,
        #[tabled(rename = "Workout")]
        workout: &'static str,
        #[tabled(rename = "Sets")]
        sets: u32,
        #[tabled(rename = "Reps")]
        reps: u32,
    }

    let rows: Vec<PlanRow> = plan
        .iter()
        .map(|w| PlanRow {
            week: w.week,
            day: w.day,
            workout: w.workout,
            sets: w.sets,
            reps: w.reps,
        })
        .collect();

    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..5)).with(Alignment::right()))
        .to_string();
    println!("{table}");

    Ok(())
}
