use anyhow::Result;
use std::io::{BufRead, Write};

use fitcalc_core::bmr::build_profile;
use fitcalc_core::models::{Gender, Profile, WeightGoal};
use fitcalc_core::units::{cm_to_feet_inches, feet_inches_to_cm, kg_to_lb, lb_to_kg};

use super::helpers::Prompter;

/// Ask for the user's measurements in imperial units and build their profile.
pub(crate) fn collect_profile<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Profile> {
    p.say("Please provide the following information:")?;
    let age: i32 = p.ask_parsed("Enter your age: ")?;
    let gender = Gender::parse(&p.ask("Enter your gender (M/F): ")?);
    let height_ft: i32 = p.ask_parsed("Enter your height in feet: ")?;
    let height_in: i32 = p.ask_parsed("Enter your remaining height in inches: ")?;
    let weight_lb: f64 = p.ask_parsed("Enter your weight in pounds: ")?;

    let height_cm = feet_inches_to_cm(height_ft, height_in);
    let weight_kg = lb_to_kg(weight_lb);
    let goal = prompt_goal(p)?;

    Ok(build_profile(age, gender, height_cm, weight_kg, goal))
}

pub(crate) fn prompt_goal<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<WeightGoal> {
    loop {
        p.say("\nChoose your weight goal:")?;
        for item in WeightGoal::MENU {
            p.say(item)?;
        }
        let choice = p.ask_choice("Enter your choice (1, 2, or 3): ")?;
        if let Some(goal) = WeightGoal::from_choice(choice) {
            return Ok(goal);
        }
        p.say("Invalid choice. Please try again.")?;
    }
}

pub(crate) fn profile_summary(profile: &Profile) -> Vec<String> {
    let (ft, inches) = cm_to_feet_inches(profile.height_cm);
    let lbs = kg_to_lb(profile.weight_kg);
    let kcal = profile.daily_calorie_target;
    vec![
        "\nYour personal details and fitness goal:".to_string(),
        format!("Age: {}", profile.age),
        format!("Gender: {}", profile.gender),
        format!("Height: {ft} ft {inches} in"),
        format!("Weight: {lbs:.2} lbs"),
        format!("Your daily calorie intake for your goal is estimated to be: {kcal:.2} kcal"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_collect(input: &str) -> (Result<Profile>, String) {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let profile = collect_profile(&mut p);
        (profile, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn test_collect_profile_male_maintain() {
        let (profile, _) = run_collect("25\nm\n5\n9\n150\n2\n");
        let profile = profile.unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.goal, WeightGoal::Maintain);
        assert!((profile.height_cm - 175.26).abs() < 1e-9);
        assert!((profile.daily_calorie_target - 1805.763).abs() < 1e-6);
    }

    #[test]
    fn test_goal_reprompts_until_valid() {
        let (profile, out) = run_collect("30\nF\n5\n5\n130\n7\n0\n3\n");
        assert_eq!(profile.unwrap().goal, WeightGoal::Gain);
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(out.matches("Choose your weight goal:").count(), 3);
    }

    #[test]
    fn test_non_numeric_age_is_fatal() {
        let (profile, _) = run_collect("twenty\n");
        assert!(profile.is_err());
    }

    #[test]
    fn test_profile_summary() {
        let profile = build_profile(
            25,
            Gender::Male,
            feet_inches_to_cm(5, 9),
            lb_to_kg(150.0),
            WeightGoal::Maintain,
        );
        let lines = profile_summary(&profile);
        assert_eq!(lines[1], "Age: 25");
        assert_eq!(lines[2], "Gender: M");
        assert_eq!(lines[3], "Height: 5 ft 9 in");
        assert_eq!(lines[4], "Weight: 150.00 lbs");
        assert_eq!(
            lines[5],
            "Your daily calorie intake for your goal is estimated to be: 1805.76 kcal"
        );
    }
}
