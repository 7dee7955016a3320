pub mod calculations;
pub mod constants;
mod facade;
mod solver;

pub use calculations::{basal_metabolic_rate, bmi, daily_calories, navy_body_fat};
pub use facade::DietPlanner;
pub use solver::{Draw, SolverRun, filter_candidates, solve};
