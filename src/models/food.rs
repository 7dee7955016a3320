use serde::{Deserialize, Serialize};

/// Dietary category of a food, derived from its name at catalog build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Veg,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Veg => "Veg",
            Category::NonVeg => "Non-Veg",
        }
    }
}

/// Allergen tag carried by a food item.
///
/// `None` doubles as "no allergy" on the request side: filtering by it is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Allergen {
    #[default]
    None,
    #[serde(rename = "milk")]
    Milk,
    #[serde(rename = "egg")]
    Egg,
    #[serde(rename = "gluten")]
    Gluten,
}

impl Allergen {
    pub const ALL: [Allergen; 4] = [Allergen::None, Allergen::Milk, Allergen::Egg, Allergen::Gluten];

    pub fn label(self) -> &'static str {
        match self {
            Allergen::None => "None",
            Allergen::Milk => "milk",
            Allergen::Egg => "egg",
            Allergen::Gluten => "gluten",
        }
    }

    /// Parse a free-form allergy string (case-insensitive).
    ///
    /// Unrecognized values resolve to `None` (no filtering), logged as a
    /// warning so the fallback is visible.
    pub fn from_input(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "" | "none" => Allergen::None,
            "milk" => Allergen::Milk,
            "egg" => Allergen::Egg,
            "gluten" => Allergen::Gluten,
            _ => {
                tracing::warn!(allergy = %input, "unrecognized allergy, not filtering");
                Allergen::None
            }
        }
    }
}

/// One row of the synthetic INDB food table.
///
/// All numeric fields are per 100 g and immutable after catalog build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique 1-based sequential code.
    pub code: u32,

    /// Display name, unique via the ` #<index>` suffix.
    pub name: String,

    /// Calories per 100 g.
    pub kcal: u32,

    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,

    pub category: Category,
    pub allergen: Allergen,
}

impl FoodItem {
    /// Protein/carb/fat grams for a given portion, scaled from per-100 g
    /// values.
    pub fn macros_for_portion(&self, portion_g: u32) -> (f64, f64, f64) {
        let factor = portion_g as f64 / 100.0;
        (
            self.protein_g * factor,
            self.carb_g * factor,
            self.fat_g * factor,
        )
    }

    /// Case-insensitive check used by the egg-based preference filters.
    pub fn name_contains_egg(&self) -> bool {
        self.name.to_lowercase().contains("egg")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            code: 1,
            name: "Egg Bhurji #0".to_string(),
            kcal: 200,
            protein_g: 12.0,
            carb_g: 30.0,
            fat_g: 8.0,
            fiber_g: 2.0,
            category: Category::NonVeg,
            allergen: Allergen::Egg,
        }
    }

    #[test]
    fn test_macros_scale_with_portion() {
        let item = sample_item();
        let (p, c, f) = item.macros_for_portion(200);
        assert!((p - 24.0).abs() < 1e-9);
        assert!((c - 60.0).abs() < 1e-9);
        assert!((f - 16.0).abs() < 1e-9);

        let (p, _, _) = item.macros_for_portion(100);
        assert!((p - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_name_contains_egg_case_insensitive() {
        let item = sample_item();
        assert!(item.name_contains_egg());

        let mut veg = sample_item();
        veg.name = "Paneer Tikka #3".to_string();
        assert!(!veg.name_contains_egg());
    }

    #[test]
    fn test_allergen_from_input() {
        assert_eq!(Allergen::from_input("Milk"), Allergen::Milk);
        assert_eq!(Allergen::from_input("GLUTEN"), Allergen::Gluten);
        assert_eq!(Allergen::from_input("None"), Allergen::None);
        assert_eq!(Allergen::from_input(""), Allergen::None);
        // Unrecognized values fall back to no filtering
        assert_eq!(Allergen::from_input("Peanuts"), Allergen::None);
    }

    #[test]
    fn test_serde_labels_match_table_vocabulary() {
        let json = serde_json::to_string(&Allergen::Milk).unwrap();
        assert_eq!(json, "\"milk\"");
        let json = serde_json::to_string(&Category::NonVeg).unwrap();
        assert_eq!(json, "\"Non-Veg\"");
    }
}
