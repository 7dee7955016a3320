use serde::Serialize;

use crate::models::{BmiReading, Category, Goal};

/// The four meal occasions, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Fixed share of the daily calorie target. Shares sum to 1.0.
    pub fn share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.22,
            MealSlot::Lunch => 0.28,
            MealSlot::Snack => 0.12,
            MealSlot::Dinner => 0.38,
        }
    }

    pub fn target_kcal(self, daily_calories: u32) -> f64 {
        daily_calories as f64 * self.share()
    }
}

/// Goal-derived aggregate macro constraints for a whole day's plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroBounds {
    pub min_fat_g: f64,
    /// `f64::INFINITY` when the goal leaves fat unconstrained.
    pub max_fat_g: f64,
    pub min_protein_g: f64,
}

impl MacroBounds {
    pub fn for_goal(goal: Goal, weight_kg: f64) -> Self {
        match goal {
            Goal::WeightLoss => MacroBounds {
                min_fat_g: 0.6 * weight_kg,
                max_fat_g: 0.7 * weight_kg,
                min_protein_g: 1.0 * weight_kg,
            },
            Goal::Maintenance => MacroBounds {
                min_fat_g: 0.8 * weight_kg,
                max_fat_g: 0.9 * weight_kg,
                min_protein_g: 0.0,
            },
            Goal::WeightGain => MacroBounds {
                min_fat_g: 0.0,
                max_fat_g: f64::INFINITY,
                min_protein_g: 0.0,
            },
        }
    }

    pub fn satisfied_by(&self, total_fat_g: f64, total_protein_g: f64) -> bool {
        self.min_fat_g <= total_fat_g
            && total_fat_g <= self.max_fat_g
            && total_protein_g >= self.min_protein_g
    }
}

/// One chosen food with its scaled portion.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedMeal {
    pub slot: MealSlot,

    /// Food name truncated to the display width (25 chars).
    pub food_name: String,

    pub category: Category,

    /// Portion in grams, always within [100, 400].
    pub portion_g: u32,

    /// Calories for the portion (integer-truncated).
    pub kcal: u32,

    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

/// A full day's meal plan with its targets, totals and constraint bounds.
///
/// `bmi` and `body_fat_pct` are caller-supplied display fields carried
/// through unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    /// One meal per slot, in `MealSlot::ALL` order.
    pub meals: Vec<SelectedMeal>,

    pub target_calories: u32,
    pub total_calories: u32,
    pub total_protein_g: f64,
    pub total_carb_g: f64,
    pub total_fat_g: f64,

    pub bounds: MacroBounds,

    /// Number of solver attempts consumed (1-based; 60 means the retry
    /// budget was exhausted).
    pub attempts: u32,

    pub bmi: BmiReading,
    pub body_fat_pct: f64,
}

impl MealPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&SelectedMeal> {
        self.meals.iter().find(|m| m.slot == slot)
    }
}

/// Outcome of a solver run.
///
/// `BestEffort` carries the final attempt's plan when no draw satisfied the
/// macro bounds within the retry budget; the solver never hard-fails on
/// infeasibility.
#[derive(Debug, Clone, Serialize)]
pub enum PlanOutcome {
    Satisfied(MealPlan),
    BestEffort(MealPlan),
}

impl PlanOutcome {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, PlanOutcome::Satisfied(_))
    }

    pub fn plan(&self) -> &MealPlan {
        match self {
            PlanOutcome::Satisfied(plan) | PlanOutcome::BestEffort(plan) => plan,
        }
    }

    pub fn into_plan(self) -> MealPlan {
        match self {
            PlanOutcome::Satisfied(plan) | PlanOutcome::BestEffort(plan) => plan,
        }
    }
}
