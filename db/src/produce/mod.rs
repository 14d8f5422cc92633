pub mod ingredients;
pub mod locations;
pub mod recipe;
pub mod store;

pub use ingredients::Ingredient;
pub use locations::Location;
pub use recipe::{Recipe, RecipeIngredient};
pub use store::ProduceStore;

#[cfg(test)]
pub(crate) mod test_utils;
