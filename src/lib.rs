pub mod calibrate;
pub mod catalog;
pub mod chat;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{DietError, Result};
pub use models::{FoodItem, MealPlan, PlanOutcome, PlanRequest};
pub use planner::DietPlanner;
