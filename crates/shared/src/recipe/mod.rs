use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Shopping aisle an ingredient is bought from.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Serialize,
    Deserialize,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum IngredientCategory {
    /// Fruits, vegetables, fresh herbs
    #[default]
    Produce,
    /// Milk, yogurt, cheese, butter
    Dairy,
    /// Grains, oils, spices, baking goods
    Pantry,
    /// Meat, fish, eggs, legumes, tofu
    Protein,
    Other,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ingredient {
    pub name: String,
    /// Free-form display amount, e.g. `1/2 ripe` or `pinch`.
    pub amount: String,
    pub category: IngredientCategory,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: IngredientCategory,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
        }
    }
}
