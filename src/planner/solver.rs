use rand::Rng;
use rand::seq::index;

use crate::models::{Allergen, Category, FoodItem, MacroBounds, MealSlot, Preference, SelectedMeal};
use crate::planner::constants::{
    MAX_ATTEMPTS, MAX_PORTION_G, MIN_PORTION_G, NAME_TRUNCATE_LEN, SLOT_SAMPLE_SIZE,
};

/// One full draw of the four slots with its aggregate totals.
#[derive(Debug, Clone)]
pub struct Draw {
    pub meals: Vec<SelectedMeal>,
    pub total_calories: u32,
    pub total_protein_g: f64,
    pub total_carb_g: f64,
    pub total_fat_g: f64,
}

/// Result of the retry loop: the accepted (or final) draw, the number of
/// attempts consumed and whether the macro bounds were met.
#[derive(Debug, Clone)]
pub struct SolverRun {
    pub draw: Draw,
    pub attempts: u32,
    pub satisfied: bool,
}

/// Select plan candidates by allergy and dietary preference.
///
/// An empty filter result falls back to the full catalog — the solver must
/// never see zero candidates. The fallback is logged, not hidden.
pub fn filter_candidates<'a>(
    catalog: &'a [FoodItem],
    preference: Preference,
    allergy: Allergen,
) -> Vec<&'a FoodItem> {
    let filtered: Vec<&FoodItem> = catalog
        .iter()
        .filter(|item| allergy == Allergen::None || item.allergen != allergy)
        .filter(|item| matches_preference(item, preference))
        .collect();

    if filtered.is_empty() {
        tracing::warn!(
            preference = preference.label(),
            allergy = allergy.label(),
            "filters matched nothing, falling back to the full catalog"
        );
        return catalog.iter().collect();
    }

    filtered
}

fn matches_preference(item: &FoodItem, preference: Preference) -> bool {
    match preference {
        Preference::Veg => item.category == Category::Veg,
        Preference::Egg => item.name_contains_egg(),
        Preference::NonVeg => item.category == Category::NonVeg && !item.name_contains_egg(),
        Preference::VegEgg => item.category == Category::Veg || item.name_contains_egg(),
        Preference::EggNonVeg => {
            item.name_contains_egg()
                || (item.category == Category::NonVeg && !item.name_contains_egg())
        }
        Preference::Everything => true,
    }
}

/// Run the bounded randomized search: redraw all four slots until the
/// aggregate fat and protein fall inside `bounds` or the retry budget runs
/// out. The final attempt is returned either way.
pub fn solve(
    candidates: &[&FoodItem],
    daily_calories: u32,
    bounds: &MacroBounds,
    rng: &mut impl Rng,
) -> SolverRun {
    debug_assert!(!candidates.is_empty());

    let mut last_draw: Option<Draw> = None;

    for attempt in 1..=MAX_ATTEMPTS {
        let draw = draw_plan(candidates, daily_calories, rng);

        if bounds.satisfied_by(draw.total_fat_g, draw.total_protein_g) {
            tracing::debug!(attempt, "macro constraints satisfied");
            return SolverRun {
                draw,
                attempts: attempt,
                satisfied: true,
            };
        }

        last_draw = Some(draw);
    }

    tracing::warn!(
        attempts = MAX_ATTEMPTS,
        "retry budget exhausted, returning best-effort plan"
    );
    SolverRun {
        draw: last_draw.expect("at least one attempt was made"),
        attempts: MAX_ATTEMPTS,
        satisfied: false,
    }
}

/// Draw one candidate meal per slot and accumulate totals.
fn draw_plan(candidates: &[&FoodItem], daily_calories: u32, rng: &mut impl Rng) -> Draw {
    let mut meals = Vec::with_capacity(MealSlot::ALL.len());
    let mut total_calories: u32 = 0;
    let mut total_protein_g = 0.0;
    let mut total_carb_g = 0.0;
    let mut total_fat_g = 0.0;

    for slot in MealSlot::ALL {
        let target = slot.target_kcal(daily_calories);
        let food = pick_for_slot(candidates, target, rng);
        let meal = select_portion(slot, food, target);

        total_calories += meal.kcal;
        total_protein_g += meal.protein_g;
        total_carb_g += meal.carb_g;
        total_fat_g += meal.fat_g;
        meals.push(meal);
    }

    Draw {
        meals,
        total_calories,
        total_protein_g,
        total_carb_g,
        total_fat_g,
    }
}

/// From a random subsample of up to `SLOT_SAMPLE_SIZE` candidates, take the
/// one whose per-100 g calories sit closest to the slot target.
fn pick_for_slot<'a>(candidates: &[&'a FoodItem], target_kcal: f64, rng: &mut impl Rng) -> &'a FoodItem {
    let sample_len = SLOT_SAMPLE_SIZE.min(candidates.len());
    index::sample(rng, candidates.len(), sample_len)
        .iter()
        .map(|i| candidates[i])
        .min_by(|a, b| {
            let da = (a.kcal as f64 - target_kcal).abs();
            let db = (b.kcal as f64 - target_kcal).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("subsample is non-empty")
}

/// Scale the chosen food to the slot target: portion = round(target*100/kcal)
/// clamped to [100, 400] g, slot calories integer-truncated.
fn select_portion(slot: MealSlot, food: &FoodItem, target_kcal: f64) -> SelectedMeal {
    let raw_portion = (target_kcal * 100.0 / food.kcal as f64).round() as i64;
    let portion_g = raw_portion.clamp(MIN_PORTION_G as i64, MAX_PORTION_G as i64) as u32;

    let kcal = (food.kcal as f64 * portion_g as f64 / 100.0) as u32;
    let (protein_g, carb_g, fat_g) = food.macros_for_portion(portion_g);

    let food_name = food.name.chars().take(NAME_TRUNCATE_LEN).collect();

    SelectedMeal {
        slot,
        food_name,
        category: food.category,
        portion_g,
        kcal,
        protein_g,
        carb_g,
        fat_g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(code: u32, name: &str, kcal: u32, protein: f64, fat: f64, allergen: Allergen) -> FoodItem {
        let category = if ["chicken", "egg", "fish", "biryani", "mutton", "prawn"]
            .iter()
            .any(|marker| name.to_lowercase().contains(marker))
        {
            Category::NonVeg
        } else {
            Category::Veg
        };

        FoodItem {
            code,
            name: name.to_string(),
            kcal,
            protein_g: protein,
            carb_g: 30.0,
            fat_g: fat,
            fiber_g: 2.0,
            category,
            allergen,
        }
    }

    fn sample_catalog() -> Vec<FoodItem> {
        vec![
            item(1, "Paneer Tikka #0", 250, 12.0, 9.0, Allergen::Milk),
            item(2, "Rice #1", 130, 3.5, 2.5, Allergen::None),
            item(3, "Chicken Curry #2", 300, 20.0, 12.0, Allergen::None),
            item(4, "Boiled Egg #3", 155, 13.0, 10.0, Allergen::Egg),
            item(5, "Egg Bhurji #4", 210, 14.0, 15.0, Allergen::Egg),
            item(6, "Roti #5", 120, 4.0, 3.0, Allergen::Gluten),
            item(7, "Mutton Korma #6", 350, 22.0, 18.0, Allergen::None),
        ]
    }

    #[test]
    fn test_filter_veg_only() {
        let catalog = sample_catalog();
        let picked = filter_candidates(&catalog, Preference::Veg, Allergen::None);
        assert!(picked.iter().all(|f| f.category == Category::Veg));
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_filter_egg_only_matches_names() {
        let catalog = sample_catalog();
        let picked = filter_candidates(&catalog, Preference::Egg, Allergen::None);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|f| f.name_contains_egg()));
    }

    #[test]
    fn test_filter_nonveg_excludes_egg_names() {
        let catalog = sample_catalog();
        let picked = filter_candidates(&catalog, Preference::NonVeg, Allergen::None);
        assert!(
            picked
                .iter()
                .all(|f| f.category == Category::NonVeg && !f.name_contains_egg())
        );
        assert_eq!(picked.len(), 2); // chicken curry, mutton korma
    }

    #[test]
    fn test_filter_allergy_removes_tagged_items() {
        let catalog = sample_catalog();
        let picked = filter_candidates(&catalog, Preference::Everything, Allergen::Milk);
        assert!(picked.iter().all(|f| f.allergen != Allergen::Milk));
    }

    #[test]
    fn test_filter_union_preferences() {
        let catalog = sample_catalog();

        let veg_egg = filter_candidates(&catalog, Preference::VegEgg, Allergen::None);
        assert_eq!(veg_egg.len(), 5); // 3 veg + 2 egg-named

        let egg_nonveg = filter_candidates(&catalog, Preference::EggNonVeg, Allergen::None);
        assert_eq!(egg_nonveg.len(), 4); // 2 egg-named + 2 non-veg-no-egg
    }

    #[test]
    fn test_filter_empty_falls_back_to_full_catalog() {
        // Egg-only preference combined with an egg allergy matches nothing
        let catalog = sample_catalog();
        let picked = filter_candidates(&catalog, Preference::Egg, Allergen::Egg);
        assert_eq!(picked.len(), catalog.len());
    }

    #[test]
    fn test_portion_always_clamped() {
        let lean = item(1, "Rice #0", 449, 5.0, 3.0, Allergen::None);
        // Tiny target forces the raw portion below 100 g
        let meal = select_portion(MealSlot::Snack, &lean, 120.0);
        assert_eq!(meal.portion_g, 100);

        let dense = item(2, "Dal Makhani #1", 80, 5.0, 3.0, Allergen::None);
        // Large target forces the raw portion above 400 g
        let meal = select_portion(MealSlot::Dinner, &dense, 1000.0);
        assert_eq!(meal.portion_g, 400);
    }

    #[test]
    fn test_portion_scaling_arithmetic() {
        let food = item(1, "Dosa #0", 200, 10.0, 8.0, Allergen::None);
        let meal = select_portion(MealSlot::Lunch, &food, 500.0);

        // round(500*100/200) = 250 g
        assert_eq!(meal.portion_g, 250);
        // trunc(200 * 250 / 100) = 500 kcal
        assert_eq!(meal.kcal, 500);
        assert!((meal.protein_g - 25.0).abs() < 1e-9);
        assert!((meal.fat_g - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_name_truncated_to_display_width() {
        let food = item(
            1,
            "Chicken Biryani With Extra Long Name #12345",
            200,
            10.0,
            8.0,
            Allergen::None,
        );
        let meal = select_portion(MealSlot::Lunch, &food, 400.0);
        assert_eq!(meal.food_name.chars().count(), 25);
    }

    #[test]
    fn test_solve_unconstrained_accepts_first_attempt() {
        let catalog = sample_catalog();
        let candidates: Vec<&FoodItem> = catalog.iter().collect();
        let bounds = MacroBounds::for_goal(Goal::WeightGain, 70.0);
        let mut rng = StdRng::seed_from_u64(9);

        let run = solve(&candidates, 2600, &bounds, &mut rng);
        assert!(run.satisfied);
        assert_eq!(run.attempts, 1);
        assert_eq!(run.draw.meals.len(), 4);
    }

    #[test]
    fn test_solve_totals_match_meal_sums() {
        let catalog = sample_catalog();
        let candidates: Vec<&FoodItem> = catalog.iter().collect();
        let bounds = MacroBounds::for_goal(Goal::WeightGain, 70.0);
        let mut rng = StdRng::seed_from_u64(3);

        let run = solve(&candidates, 2000, &bounds, &mut rng);
        let draw = &run.draw;

        let kcal_sum: u32 = draw.meals.iter().map(|m| m.kcal).sum();
        let fat_sum: f64 = draw.meals.iter().map(|m| m.fat_g).sum();
        assert_eq!(draw.total_calories, kcal_sum);
        assert!((draw.total_fat_g - fat_sum).abs() < 1e-9);

        let slots: Vec<MealSlot> = draw.meals.iter().map(|m| m.slot).collect();
        assert_eq!(slots, MealSlot::ALL.to_vec());
    }

    #[test]
    fn test_solve_best_effort_when_infeasible() {
        // A catalog of fat-free foods can never reach a 42 g fat floor
        let catalog = vec![
            item(1, "Rice #0", 200, 5.0, 0.0, Allergen::None),
            item(2, "Apple #1", 150, 4.0, 0.0, Allergen::None),
        ];
        let candidates: Vec<&FoodItem> = catalog.iter().collect();
        let bounds = MacroBounds::for_goal(Goal::WeightLoss, 70.0);
        let mut rng = StdRng::seed_from_u64(1);

        let run = solve(&candidates, 1900, &bounds, &mut rng);
        assert!(!run.satisfied);
        assert_eq!(run.attempts, MAX_ATTEMPTS);
        assert_eq!(run.draw.meals.len(), 4);
    }

    #[test]
    fn test_solve_satisfied_run_respects_bounds() {
        let catalog = sample_catalog();
        let candidates: Vec<&FoodItem> = catalog.iter().collect();
        let bounds = MacroBounds::for_goal(Goal::WeightLoss, 70.0);
        let mut rng = StdRng::seed_from_u64(42);

        let run = solve(&candidates, 1900, &bounds, &mut rng);
        if run.satisfied {
            assert!(bounds.satisfied_by(run.draw.total_fat_g, run.draw.total_protein_g));
            assert!(run.attempts <= MAX_ATTEMPTS);
        } else {
            assert_eq!(run.attempts, MAX_ATTEMPTS);
        }
    }
}
