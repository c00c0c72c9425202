use serde::{Deserialize, Serialize};

/// FoodData Central nutrient numbers for the five tracked macros.
pub const NUTRIENT_ID_ENERGY_KCAL: u32 = 1008;
pub const NUTRIENT_ID_PROTEIN: u32 = 1003;
pub const NUTRIENT_ID_CARBS: u32 = 1005;
pub const NUTRIENT_ID_FAT: u32 = 1004;
pub const NUTRIENT_ID_FIBER: u32 = 1079;

/// Absolute nutrient content for one serving of food, rounded to whole units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientRecord {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
}

impl NutrientRecord {
    /// Builds a record from an upstream per-100g nutrient list, scaled to
    /// `amount_grams`. Nutrient ids missing from the list stay at 0.
    pub fn from_per_100g(nutrients: &[FoodNutrient], amount_grams: f64) -> Self {
        let mut record = NutrientRecord::default();
        for nutrient in nutrients {
            let scaled = scale_to_amount(nutrient.value, amount_grams);
            match nutrient.nutrient_id {
                NUTRIENT_ID_ENERGY_KCAL => record.calories = scaled,
                NUTRIENT_ID_PROTEIN => record.protein = scaled,
                NUTRIENT_ID_CARBS => record.carbs = scaled,
                NUTRIENT_ID_FAT => record.fat = scaled,
                NUTRIENT_ID_FIBER => record.fiber = scaled,
                _ => {}
            }
        }
        record
    }
}

/// Upstream values are per 100 g. Scaling is linear and rounding happens
/// after scaling, so `scale(v, 100)` is the identity (modulo rounding of v).
pub fn scale_to_amount(per_100g: f64, amount_grams: f64) -> u32 {
    let scaled = per_100g * amount_grams / 100.0;
    scaled.round().max(0.0) as u32
}

/// A nutrient record together with the canonical food description the
/// upstream search resolved the query to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedNutrition {
    pub name: String,
    pub nutrients: NutrientRecord,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FoodSearchResponse {
    #[serde(default)]
    pub foods: Vec<FoodHit>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodHit {
    pub fdc_id: u64,
    pub description: String,
    #[serde(default)]
    pub food_nutrients: Vec<FoodNutrient>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodNutrient {
    pub nutrient_id: u32,
    #[serde(default)]
    pub value: f64,
}
