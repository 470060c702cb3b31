mod age;
mod command;
mod date;
pub mod mealplan;
pub mod recipe;

pub use age::*;
pub use command::*;
pub use date::*;
pub use mealplan::MealType;
pub use recipe::{Ingredient, IngredientCategory};
