use tracing::info;

use crate::models::WeightLogEntry;
use crate::units::kg_to_lb;

pub const TABLE_HEADER: &str = "Date       Weight (lbs)  Calories (kcal)";
pub const TABLE_RULE: &str = "-----------------------------------------";

/// Append-only, insertion-ordered log of weight and calorie entries.
#[derive(Debug, Default, Clone)]
pub struct WeightLog {
    entries: Vec<WeightLogEntry>,
}

impl WeightLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: WeightLogEntry) {
        info!(
            date = %entry.date,
            weight_kg = entry.weight_kg,
            calories = entry.calories_kcal,
            "logged weight entry"
        );
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[WeightLogEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header, rule and one row per entry; weights are shown in pounds.
    #[must_use]
    pub fn render_table(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.entries.len() + 2);
        lines.push(TABLE_HEADER.to_string());
        lines.push(TABLE_RULE.to_string());
        lines.extend(self.entries.iter().map(|e| {
            let date = e.date.format("%Y-%m-%d");
            let weight_lb = kg_to_lb(e.weight_kg);
            let calories = format_kcal(e.calories_kcal);
            format!("{date}   {weight_lb:.2}       {calories}")
        }));
        lines
    }
}

/// Whole values keep one decimal place ("2000.0"); fractional ones print as-is.
fn format_kcal(kcal: f64) -> String {
    if kcal.is_finite() && kcal.fract() == 0.0 && kcal.abs() < 1e16 {
        format!("{kcal:.1}")
    } else {
        format!("{kcal}")
    }
}
