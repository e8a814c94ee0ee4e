use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Only a case-insensitive "M" selects the male formula; anything else,
    /// including "male" or an empty string, is treated as female.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.trim().to_uppercase() == "M" {
            Self::Male
        } else {
            Self::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("M"),
            Self::Female => f.write_str("F"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightGoal {
    Lose,
    Maintain,
    Gain,
}

impl WeightGoal {
    pub const MENU: &'static [&'static str] =
        &["1. Lose weight", "2. Maintain weight", "3. Gain weight"];

    #[must_use]
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Lose),
            2 => Some(Self::Maintain),
            3 => Some(Self::Gain),
            _ => None,
        }
    }

    /// kcal added on top of the BMR for this goal.
    #[must_use]
    pub fn offset_kcal(self) -> f64 {
        match self {
            Self::Lose => 0.0,
            Self::Maintain => 150.0,
            Self::Gain => 500.0,
        }
    }
}

pub fn parse_weight_goal(goal: &str) -> anyhow::Result<WeightGoal> {
    match goal.to_lowercase().as_str() {
        "lose" | "1" => Ok(WeightGoal::Lose),
        "maintain" | "2" => Ok(WeightGoal::Maintain),
        "gain" | "3" => Ok(WeightGoal::Gain),
        _ => anyhow::bail!("Invalid goal '{goal}'. Must be one of: lose, maintain, gain"),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub goal: WeightGoal,
    pub daily_calorie_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightLogEntry {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub calories_kcal: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub exercise: String,
    pub sets: i32,
    pub reps: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_male() {
        assert_eq!(Gender::parse("M"), Gender::Male);
        assert_eq!(Gender::parse("m"), Gender::Male);
        assert_eq!(Gender::parse(" m\n"), Gender::Male);
    }

    #[test]
    fn test_gender_parse_falls_back_to_female() {
        assert_eq!(Gender::parse("F"), Gender::Female);
        assert_eq!(Gender::parse("female"), Gender::Female);
        assert_eq!(Gender::parse("male"), Gender::Female);
        assert_eq!(Gender::parse(""), Gender::Female);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "M");
        assert_eq!(Gender::Female.to_string(), "F");
    }

    #[test]
    fn test_weight_goal_from_choice() {
        assert_eq!(WeightGoal::from_choice(1), Some(WeightGoal::Lose));
        assert_eq!(WeightGoal::from_choice(2), Some(WeightGoal::Maintain));
        assert_eq!(WeightGoal::from_choice(3), Some(WeightGoal::Gain));
        assert_eq!(WeightGoal::from_choice(0), None);
        assert_eq!(WeightGoal::from_choice(4), None);
        assert_eq!(WeightGoal::from_choice(-1), None);
    }

    #[test]
    fn test_parse_weight_goal() {
        assert_eq!(parse_weight_goal("lose").unwrap(), WeightGoal::Lose);
        assert_eq!(parse_weight_goal("Maintain").unwrap(), WeightGoal::Maintain);
        assert_eq!(parse_weight_goal("3").unwrap(), WeightGoal::Gain);
        assert!(parse_weight_goal("bulk").is_err());
    }

    #[test]
    fn test_profile_serializes_gender_as_letter() {
        let profile = Profile {
            age: 30,
            gender: Gender::Female,
            height_cm: 165.1,
            weight_kg: 60.0,
            goal: WeightGoal::Maintain,
            daily_calorie_target: 1500.0,
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["gender"], "F");
        assert_eq!(json["goal"], "maintain");
    }

    #[test]
    fn test_weight_log_entry_serializes_date() {
        let entry = WeightLogEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            weight_kg: 68.0,
            calories_kcal: 2000.0,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-01-01");
    }
}
