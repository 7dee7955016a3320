use crate::catalog::FoodCatalog;
use crate::models::{MealPlan, PlanOutcome};

/// Display a meal plan with its targets, totals and constraint verdict.
pub fn display_plan(outcome: &PlanOutcome) {
    let plan = outcome.plan();

    println!();
    println!("=== Diet Plan ===");
    println!();
    println!(
        "BMI: {} ({})   Body fat: {}% (US Navy)",
        plan.bmi.value,
        plan.bmi.status.label(),
        plan.body_fat_pct
    );
    println!("Target calories: {} kcal", plan.target_calories);
    println!();

    let max_name_len = plan
        .meals
        .iter()
        .map(|m| m.food_name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.meals {
        println!(
            "{:<9} {:<width$} ({:<7}) {:>3} g  {:>4} kcal  P:{:>5.1}  C:{:>5.1}  F:{:>5.1}",
            meal.slot.label(),
            meal.food_name,
            meal.category.label(),
            meal.portion_g,
            meal.kcal,
            meal.protein_g,
            meal.carb_g,
            meal.fat_g,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Total: {} kcal  protein {:.1} g  carbs {:.1} g  fat {:.1} g",
        plan.total_calories, plan.total_protein_g, plan.total_carb_g, plan.total_fat_g
    );
    display_bounds(plan);

    if outcome.is_satisfied() {
        println!("Constraints satisfied after {} attempt(s).", plan.attempts);
    } else {
        println!(
            "Constraints NOT satisfied after {} attempts; showing best-effort plan.",
            plan.attempts
        );
    }
    println!();
}

fn display_bounds(plan: &MealPlan) {
    if plan.bounds.max_fat_g.is_finite() {
        println!(
            "Fat range: {:.1}-{:.1} g",
            plan.bounds.min_fat_g, plan.bounds.max_fat_g
        );
    } else {
        println!("Fat range: unconstrained");
    }

    if plan.bounds.min_protein_g > 0.0 {
        println!("Protein target: >= {:.1} g", plan.bounds.min_protein_g);
    }
}

/// Display catalog summary statistics.
pub fn display_catalog_summary(catalog: &FoodCatalog) {
    let (veg, non_veg) = catalog.category_counts();

    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());
    println!("Veg: {}   Non-Veg: {}", veg, non_veg);

    if let Some(first) = catalog.items().first() {
        println!();
        println!("First item:");
        println!(
            "  #{} {} - {} kcal, P:{:.1} C:{:.1} F:{:.1} fiber:{:.1} [{}] allergen: {}",
            first.code,
            first.name,
            first.kcal,
            first.protein_g,
            first.carb_g,
            first.fat_g,
            first.fiber_g,
            first.category.label(),
            first.allergen.label()
        );
    }
    println!();
}
