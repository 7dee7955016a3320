use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Allergen, Category, FoodItem};
use crate::planner::constants::{
    CARB_RANGE_G, FAT_RANGE_G, FIBER_RANGE_G, KCAL_RANGE, PROTEIN_RANGE_G,
};

/// Base names for the synthetic INDB table. Uniqueness comes from the
/// sequential ` #<index>` suffix, not the pool.
pub const NAME_POOL: [&str; 15] = [
    "Chicken Curry",
    "Egg Bhurji",
    "Fish Fry",
    "Paneer Tikka",
    "Dal Makhani",
    "Rice",
    "Roti",
    "Idli Sambhar",
    "Dosa",
    "Apple",
    "Boiled Egg",
    "Yogurt",
    "Chicken Biryani",
    "Mutton Korma",
    "Prawn Masala",
];

/// Name substrings that mark a food as Non-Veg.
const NON_VEG_MARKERS: [&str; 6] = ["chicken", "egg", "fish", "biryani", "mutton", "prawn"];

/// Catalog build parameters.
///
/// The whole build, names included, is driven by one seeded generator:
/// equal configs produce byte-identical catalogs. (The reference
/// implementation seeded only the numeric draws, which made names drift
/// between runs; that was judged unintentional.)
#[derive(Debug, Clone, Copy)]
pub struct CatalogConfig {
    pub size: usize,
    pub seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: 1014,
            seed: 42,
        }
    }
}

/// Read-only synthetic food table, fixed at construction.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog deterministically from the config.
    pub fn generate(config: &CatalogConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let items = (0..config.size)
            .map(|i| generate_item(i, &mut rng))
            .collect();
        Self { items }
    }

    /// Wrap an existing item list (e.g. loaded from disk).
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item count per category, (veg, non_veg).
    pub fn category_counts(&self) -> (usize, usize) {
        let veg = self
            .items
            .iter()
            .filter(|item| item.category == Category::Veg)
            .count();
        (veg, self.items.len() - veg)
    }
}

fn generate_item(index: usize, rng: &mut StdRng) -> FoodItem {
    let base = NAME_POOL
        .choose(rng)
        .copied()
        .unwrap_or(NAME_POOL[0]);
    let name = format!("{} #{}", base, index);

    let category = derive_category(&name);

    FoodItem {
        code: index as u32 + 1,
        name,
        kcal: rng.gen_range(KCAL_RANGE.0..KCAL_RANGE.1),
        protein_g: rng.gen_range(PROTEIN_RANGE_G.0..PROTEIN_RANGE_G.1),
        carb_g: rng.gen_range(CARB_RANGE_G.0..CARB_RANGE_G.1),
        fat_g: rng.gen_range(FAT_RANGE_G.0..FAT_RANGE_G.1),
        fiber_g: rng.gen_range(FIBER_RANGE_G.0..FIBER_RANGE_G.1),
        category,
        allergen: *Allergen::ALL.choose(rng).unwrap_or(&Allergen::None),
    }
}

/// Non-Veg iff the lowercased name contains any marker substring.
fn derive_category(name: &str) -> Category {
    let lower = name.to_lowercase();
    if NON_VEG_MARKERS.iter().any(|marker| lower.contains(marker)) {
        Category::NonVeg
    } else {
        Category::Veg
    }
}
