use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::{CatalogConfig, FoodCatalog};
use crate::error::{DietError, Result};
use crate::models::{MacroBounds, MealPlan, PlanOutcome, PlanRequest};
use crate::planner::calculations::daily_calories;
use crate::planner::solver::{filter_candidates, solve};

/// Orchestrates catalog, calculator and solver behind one `plan` call.
///
/// The catalog is read-only for the planner's lifetime; each call owns its
/// sampling state, so one planner can serve concurrent callers.
pub struct DietPlanner {
    catalog: FoodCatalog,
}

impl DietPlanner {
    /// Build a planner over a freshly generated catalog.
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            catalog: FoodCatalog::generate(config),
        }
    }

    pub fn from_catalog(catalog: FoodCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Generate a plan with fresh thread-local sampling state.
    pub fn plan(&self, request: &PlanRequest) -> Result<PlanOutcome> {
        let mut rng = StdRng::from_entropy();
        self.plan_with_rng(request, &mut rng)
    }

    /// Generate a plan with caller-supplied sampling state (deterministic
    /// under a seeded rng).
    pub fn plan_with_rng(&self, request: &PlanRequest, rng: &mut impl Rng) -> Result<PlanOutcome> {
        if self.catalog.is_empty() {
            return Err(DietError::EmptyCatalog);
        }
        if request.weight_kg <= 0.0 {
            return Err(DietError::InvalidMeasurement(format!(
                "weight {} kg must be positive",
                request.weight_kg
            )));
        }

        let calories = daily_calories(
            request.age,
            request.gender,
            request.weight_kg,
            request.height_cm,
            request.activity,
            request.goal,
        );

        let candidates =
            filter_candidates(self.catalog.items(), request.preference, request.allergy);
        let bounds = MacroBounds::for_goal(request.goal, request.weight_kg);

        let run = solve(&candidates, calories, &bounds, rng);

        let plan = MealPlan {
            meals: run.draw.meals,
            target_calories: calories,
            total_calories: run.draw.total_calories,
            total_protein_g: run.draw.total_protein_g,
            total_carb_g: run.draw.total_carb_g,
            total_fat_g: run.draw.total_fat_g,
            bounds,
            attempts: run.attempts,
            bmi: request.bmi,
            body_fat_pct: request.body_fat_pct,
        };

        Ok(if run.satisfied {
            PlanOutcome::Satisfied(plan)
        } else {
            PlanOutcome::BestEffort(plan)
        })
    }
}
