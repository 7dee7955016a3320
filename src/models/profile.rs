use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::Allergen;

/// Similarity floor for fuzzy matching of free-form vocabulary strings.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// BMI band per the four-band WHO-style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiStatus {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiStatus {
    pub fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiStatus::Underweight
        } else if bmi < 25.0 {
            BmiStatus::Normal
        } else if bmi < 30.0 {
            BmiStatus::Overweight
        } else {
            BmiStatus::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiStatus::Underweight => "Underweight",
            BmiStatus::Normal => "Normal",
            BmiStatus::Overweight => "Overweight",
            BmiStatus::Obese => "Obese",
        }
    }
}

/// BMI value (rounded to one decimal) with its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub value: f64,
    pub status: BmiStatus,
}

/// Body-fat estimate, clamped to a physiological range by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFat {
    pub percent: f64,
    /// Estimation method label, e.g. "US Navy".
    pub method: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Accepts "m"/"male" and "f"/"female" in any case. Anything else is
    /// rejected rather than guessed.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Activity level with its fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary(No activity)",
            ActivityLevel::Light => "Light(Walk)",
            ActivityLevel::Moderate => "Moderate(Walk+Light Excersises)",
            ActivityLevel::Active => "Active(Light workout GYM)",
            ActivityLevel::VeryActive => "Very active(Workout GYM + Sports)",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Match a free-form activity string against the level labels, first
    /// exactly, then fuzzily. Unmatched input resolves to `Moderate`
    /// (multiplier 1.55), logged as a warning.
    pub fn from_input(input: &str) -> Self {
        match fuzzy_pick(input, &Self::ALL, |level| level.label()) {
            Some(level) => level,
            None => {
                tracing::warn!(activity = %input, "unrecognized activity level, assuming Moderate");
                ActivityLevel::Moderate
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    WeightLoss,
    Maintenance,
    WeightGain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::WeightLoss, Goal::Maintenance, Goal::WeightGain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::WeightLoss => "Weight loss",
            Goal::Maintenance => "Maintenance",
            Goal::WeightGain => "Weight Gain",
        }
    }

    /// Anything that is not recognizably loss or gain is Maintenance, the
    /// reference default branch.
    pub fn from_input(input: &str) -> Self {
        fuzzy_pick(input, &Self::ALL, |goal| goal.label()).unwrap_or(Goal::Maintenance)
    }
}

/// Dietary preference, one of the six reference categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preference {
    /// Veg category only.
    Veg,
    /// Foods whose name contains "egg".
    Egg,
    /// Non-Veg category, excluding egg-named foods.
    NonVeg,
    /// Veg category plus egg-named foods.
    VegEgg,
    /// Egg-named foods plus Non-Veg without egg.
    EggNonVeg,
    /// No filter.
    Everything,
}

impl Preference {
    pub const ALL: [Preference; 6] = [
        Preference::Veg,
        Preference::Egg,
        Preference::NonVeg,
        Preference::VegEgg,
        Preference::EggNonVeg,
        Preference::Everything,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preference::Veg => "Veg",
            Preference::Egg => "Egg",
            Preference::NonVeg => "Non-Veg",
            Preference::VegEgg => "Veg+Egg",
            Preference::EggNonVeg => "Egg+Non-Veg",
            Preference::Everything => "Veg+Egg+Non-Veg",
        }
    }

    /// Unrecognized preference strings mean "no filter", logged as a
    /// warning.
    pub fn from_input(input: &str) -> Self {
        match fuzzy_pick(input, &Self::ALL, |pref| pref.label()) {
            Some(pref) => pref,
            None => {
                tracing::warn!(preference = %input, "unrecognized preference, not filtering");
                Preference::Everything
            }
        }
    }
}

/// Exact (case-insensitive) match first, then best jaro-winkler match above
/// the threshold.
fn fuzzy_pick<T: Copy>(input: &str, options: &[T], label: impl Fn(T) -> &'static str) -> Option<T> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(found) = options
        .iter()
        .find(|opt| label(**opt).to_lowercase() == needle)
    {
        return Some(*found);
    }

    options
        .iter()
        .map(|opt| (*opt, jaro_winkler(&label(*opt).to_lowercase(), &needle)))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(opt, _)| opt)
}

/// Everything the planner needs for one `plan()` call.
///
/// `bmi` and `body_fat_pct` are precomputed by the caller and pass through
/// to the result unmodified.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub age: f64,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub preference: Preference,
    pub allergy: Allergen,
    pub bmi: BmiReading,
    pub body_fat_pct: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_from_input() {
        assert_eq!(Gender::from_input("m"), Some(Gender::Male));
        assert_eq!(Gender::from_input("Female"), Some(Gender::Female));
        assert_eq!(Gender::from_input("x"), None);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::Light.multiplier(), 1.375);
        assert_eq!(ActivityLevel::Moderate.multiplier(), 1.55);
        assert_eq!(ActivityLevel::Active.multiplier(), 1.725);
        assert_eq!(ActivityLevel::VeryActive.multiplier(), 1.9);
    }

    #[test]
    fn test_activity_from_input_exact_label() {
        let level = ActivityLevel::from_input("Moderate(Walk+Light Excersises)");
        assert_eq!(level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_activity_from_input_fallback() {
        // Unknown strings keep the reference default multiplier of 1.55
        assert_eq!(ActivityLevel::from_input("couch"), ActivityLevel::Moderate);
    }

    #[test]
    fn test_preference_from_input() {
        assert_eq!(Preference::from_input("Veg"), Preference::Veg);
        assert_eq!(Preference::from_input("veg+egg"), Preference::VegEgg);
        assert_eq!(
            Preference::from_input("Egg+Non-Veg"),
            Preference::EggNonVeg
        );
        assert_eq!(Preference::from_input("anything"), Preference::Everything);
    }

    #[test]
    fn test_goal_from_input_defaults_to_maintenance() {
        assert_eq!(Goal::from_input("Weight loss"), Goal::WeightLoss);
        assert_eq!(Goal::from_input("Weight Gain"), Goal::WeightGain);
        assert_eq!(Goal::from_input("whatever"), Goal::Maintenance);
    }
}
