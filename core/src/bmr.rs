//! Mifflin-St Jeor basal metabolic rate and goal-adjusted calorie targets.

use tracing::debug;

use crate::models::{Gender, Profile, WeightGoal};

const MALE_OFFSET: f64 = 5.0;
const FEMALE_OFFSET: f64 = -161.0;

/// Resting daily energy expenditure in kcal.
#[must_use]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: i32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + MALE_OFFSET,
        Gender::Female => base + FEMALE_OFFSET,
    }
}

#[must_use]
pub fn adjust_for_goal(bmr: f64, goal: WeightGoal) -> f64 {
    bmr + goal.offset_kcal()
}

/// Build a profile from metric measurements, computing its calorie target.
#[must_use]
pub fn build_profile(
    age: i32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    goal: WeightGoal,
) -> Profile {
    let bmr = calculate_bmr(gender, weight_kg, height_cm, age);
    let daily_calorie_target = adjust_for_goal(bmr, goal);
    debug!(
        %gender,
        ?goal,
        bmr,
        daily_calorie_target,
        "computed calorie target"
    );
    Profile {
        age,
        gender,
        height_cm,
        weight_kg,
        goal,
        daily_calorie_target,
    }
}
