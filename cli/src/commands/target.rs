use anyhow::{Result, bail};

use fitcalc_core::bmr::build_profile;
use fitcalc_core::models::{Gender, parse_weight_goal};
use fitcalc_core::units::{feet_inches_to_cm, lb_to_kg};

use super::profile::profile_summary;

pub(crate) fn cmd_bmr(
    age: i32,
    gender: &str,
    feet: i32,
    inches: i32,
    pounds: f64,
    goal: &str,
    json: bool,
) -> Result<()> {
    let report = bmr_report(age, gender, feet, inches, pounds, goal, json)?;
    println!("{report}");
    Ok(())
}

/// Validate the measurements and render the calorie target as text or JSON.
fn bmr_report(
    age: i32,
    gender: &str,
    feet: i32,
    inches: i32,
    pounds: f64,
    goal: &str,
    json: bool,
) -> Result<String> {
    if age <= 0 {
        bail!("Age must be greater than 0");
    }
    if pounds <= 0.0 {
        bail!("Weight must be greater than 0");
    }
    if feet < 0 || inches < 0 {
        bail!("Height must not be negative");
    }

    let goal = parse_weight_goal(goal)?;
    let profile = build_profile(
        age,
        Gender::parse(gender),
        feet_inches_to_cm(feet, inches),
        lb_to_kg(pounds),
        goal,
    );

    if json {
        Ok(serde_json::to_string_pretty(&profile)?)
    } else {
        Ok(profile_summary(&profile).join("\n"))
    }
}
