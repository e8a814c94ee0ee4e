//! 12-week workout schedules: the fixed category rotation and user-authored plans.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Serialize;

use crate::models::Exercise;

pub const PLAN_WEEKS: u32 = 12;
pub const MAX_WORKOUT_DAYS: u32 = 6;
pub const DEFAULT_SETS: u32 = 3;
pub const DEFAULT_REPS: u32 = 10;

pub const ROTATION: &[&str] = &[
    "Cardio",
    "Upper body",
    "Lower body",
    "Core",
    "Cardio",
    "Full body",
];

pub fn validate_workout_days(days: u32) -> Result<u32> {
    if !(1..=MAX_WORKOUT_DAYS).contains(&days) {
        bail!("Workout days must be between 1 and {MAX_WORKOUT_DAYS} (got {days})");
    }
    Ok(days)
}

/// Category for a 1-based week and day of the fixed rotation. A zero week or
/// day is clamped to the start of the rotation.
#[must_use]
pub fn rotation_category(week: u32, day: u32) -> &'static str {
    let idx = week.saturating_add(day).saturating_sub(2) as usize % ROTATION.len();
    ROTATION[idx]
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedWorkout {
    pub week: u32,
    pub day: u32,
    pub workout: &'static str,
    pub sets: u32,
    pub reps: u32,
}

/// Materialize the fixed rotation, week by week, for machine-readable output.
#[must_use]
pub fn fixed_plan(days: u32) -> Vec<PlannedWorkout> {
    (1..=PLAN_WEEKS)
        .flat_map(|week| {
            (1..=days).map(move |day| PlannedWorkout {
                week,
                day,
                workout: rotation_category(week, day),
                sets: DEFAULT_SETS,
                reps: DEFAULT_REPS,
            })
        })
        .collect()
}

#[must_use]
pub fn render_fixed_plan(days: u32) -> Vec<String> {
    let mut lines = vec!["\nYour 12-week workout plan:".to_string()];
    for week in 1..=PLAN_WEEKS {
        lines.push(format!("\nWeek {week}:"));
        for day in 1..=days {
            let category = rotation_category(week, day);
            lines.push(format!(
                "  Day {day}: {category} - {DEFAULT_SETS} sets of {DEFAULT_REPS} reps"
            ));
        }
    }
    lines
}

/// A fully materialized user plan: week number to ordered days of exercises.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomPlan {
    weeks: BTreeMap<u32, Vec<Vec<Exercise>>>,
}

impl CustomPlan {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next day to `week`; days are numbered in push order.
    pub fn push_day(&mut self, week: u32, exercises: Vec<Exercise>) {
        self.weeks.entry(week).or_default().push(exercises);
    }

    pub fn weeks(&self) -> impl Iterator<Item = (u32, &[Vec<Exercise>])> {
        self.weeks.iter().map(|(w, days)| (*w, days.as_slice()))
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.weeks.values().map(Vec::len).sum()
    }
}

#[must_use]
pub fn render_custom_plan(plan: &CustomPlan) -> Vec<String> {
    let mut lines = vec!["\nYour custom 12-week workout plan:".to_string()];
    for (week, days) in plan.weeks() {
        lines.push(format!("\nWeek {week}:"));
        for (day, exercises) in (1..).zip(days) {
            if exercises.is_empty() {
                lines.push(format!("  Day {day}: Rest"));
            }
            for e in exercises {
                lines.push(format!(
                    "  Day {day}: {} - {} sets of {} reps",
                    e.exercise, e.sets, e.reps
                ));
            }
        }
    }
    lines
}
