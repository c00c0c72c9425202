use serde::{Deserialize, Serialize};

/// The fixed category table the catalog is seeded from. Kept as data rather
/// than code so an alternate table can be injected for tests or future
/// configuration.
const BUILTIN_TAXONOMY: &[(&str, [&str; 10])] = &[
    (
        "Protein",
        [
            "Chicken breast",
            "Salmon",
            "Eggs",
            "Ground beef",
            "Turkey breast",
            "Tuna",
            "Shrimp",
            "Tofu",
            "Lentils",
            "Black beans",
        ],
    ),
    (
        "Carbs",
        [
            "White rice",
            "Brown rice",
            "Oats",
            "Whole wheat bread",
            "Pasta",
            "Quinoa",
            "Potato",
            "Sweet potato",
            "Corn tortilla",
            "Bagel",
        ],
    ),
    (
        "Fat",
        [
            "Avocado",
            "Almonds",
            "Olive oil",
            "Peanut butter",
            "Walnuts",
            "Butter",
            "Cheddar cheese",
            "Chia seeds",
            "Dark chocolate",
            "Sunflower seeds",
        ],
    ),
    (
        "Fruit",
        [
            "Apple",
            "Banana",
            "Orange",
            "Strawberries",
            "Blueberries",
            "Grapes",
            "Mango",
            "Pineapple",
            "Watermelon",
            "Peach",
        ],
    ),
    (
        "Dairy",
        [
            "Milk",
            "Greek yogurt",
            "Cottage cheese",
            "Mozzarella cheese",
            "Swiss cheese",
            "Yogurt",
            "Cream cheese",
            "Kefir",
            "Sour cream",
            "Ice cream",
        ],
    ),
    (
        "Vegetables",
        [
            "Broccoli",
            "Spinach",
            "Carrots",
            "Kale",
            "Cauliflower",
            "Bell pepper",
            "Cucumber",
            "Tomato",
            "Zucchini",
            "Green beans",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub name: String,
    pub foods: Vec<String>,
}

/// Ordered category -> food-name table used to seed the browsable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: Vec<TaxonomyCategory>,
}

impl Taxonomy {
    pub fn builtin() -> Self {
        Taxonomy {
            categories: BUILTIN_TAXONOMY
                .iter()
                .map(|(name, foods)| TaxonomyCategory {
                    name: (*name).to_string(),
                    foods: foods.iter().map(|f| (*f).to_string()).collect(),
                })
                .collect(),
        }
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_six_categories_of_ten() {
        let taxonomy = Taxonomy::builtin();
        assert_eq!(taxonomy.categories.len(), 6);
        for category in &taxonomy.categories {
            assert_eq!(category.foods.len(), 10, "category {}", category.name);
        }
    }

    #[test]
    fn builtin_category_order_is_fixed() {
        let names: Vec<_> = Taxonomy::builtin()
            .categories
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(
            names,
            ["Protein", "Carbs", "Fat", "Fruit", "Dairy", "Vegetables"]
        );
    }
}
