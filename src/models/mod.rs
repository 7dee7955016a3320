mod food;
mod plan;
mod profile;

pub use food::{Allergen, Category, FoodItem};
pub use plan::{MacroBounds, MealPlan, MealSlot, PlanOutcome, SelectedMeal};
pub use profile::{
    ActivityLevel, BmiReading, BmiStatus, BodyFat, Gender, Goal, PlanRequest, Preference,
};
