use crate::models::{Profile, WeightLogEntry};
use crate::weight_log::WeightLog;

/// State owned by one interactive run: the fixed profile and its weight log.
#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    log: WeightLog,
}

impl Session {
    #[must_use]
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            log: WeightLog::new(),
        }
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn weight_log(&self) -> &WeightLog {
        &self.log
    }

    pub fn log_weight(&mut self, entry: WeightLogEntry) {
        self.log.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmr::build_profile;
    use crate::models::{Gender, WeightGoal};
    use chrono::NaiveDate;

    #[test]
    fn test_session_starts_empty() {
        let profile = build_profile(25, Gender::Female, 165.0, 60.0, WeightGoal::Lose);
        let session = Session::new(profile);
        assert!(session.weight_log().is_empty());
        assert_eq!(session.profile().age, 25);
    }

    #[test]
    fn test_session_log_weight() {
        let profile = build_profile(25, Gender::Male, 175.0, 70.0, WeightGoal::Maintain);
        let mut session = Session::new(profile);
        session.log_weight(WeightLogEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            weight_kg: 70.0,
            calories_kcal: 2100.0,
        });
        assert_eq!(session.weight_log().len(), 1);
    }
}
