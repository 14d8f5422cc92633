//! Scores recipes by how much produce they still need.
//!
//! A recipe's `nonMatchingCount` is the number of its ingredient links that
//! point at a fruit or vegetable the caller hasn't already got. Recipes are
//! then ordered from most missing produce to least.

use std::{cmp::Reverse, collections::HashSet};

use db::{Ingredient, Recipe, RecipeIngredient};
use serde::{Deserialize, Serialize};

/// The ingredient ids a caller already has. Lives for one request only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Selection(HashSet<i32>);

impl Selection {
    pub(crate) fn contains(&self, ingredient_id: i32) -> bool {
        self.0.contains(&ingredient_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<i32> for Selection {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Counts links whose ingredient is produce and isn't in `have`.
///
/// Links with no resolvable ingredient never count.
pub(crate) fn non_matching_count(links: &[RecipeIngredient], have: &Selection) -> usize {
    links
        .iter()
        .filter(|link| !have.contains(link.ingredient_id))
        .filter(|link| link.ingredient.as_ref().is_some_and(Ingredient::is_produce))
        .count()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct RankedRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    #[serde(rename = "nonMatchingCount")]
    pub non_matching_count: usize,
}

pub(crate) fn rank_recipes(recipes: Vec<Recipe>, have: &Selection) -> Vec<RankedRecipe> {
    let mut ranked: Vec<RankedRecipe> = recipes
        .into_iter()
        .map(|recipe| {
            let non_matching_count = non_matching_count(&recipe.recipe_ingredients, have);

            RankedRecipe {
                recipe,
                non_matching_count,
            }
        })
        .collect();

    // sort_by_key is stable, ties keep the order the store returned them in
    ranked.sort_by_key(|r| Reverse(r.non_matching_count));

    ranked
}

/// The recipe's resolved fruit and vegetable ingredients, in link order.
pub(crate) fn produce_ingredients(recipe: &Recipe) -> impl Iterator<Item = &Ingredient> {
    recipe
        .recipe_ingredients
        .iter()
        .filter_map(|link| link.ingredient.as_ref())
        .filter(|ingredient| ingredient.is_produce())
}

/// Counters shown under the checklist.
///
/// Only ids that appear in `ingredients` count. `total_produce` adds selected
/// fruits and selected vegetables, so an ingredient flagged as both counts
/// twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SelectionSummary {
    pub total_checked: usize,
    pub total_produce: usize,
}

impl SelectionSummary {
    pub(crate) fn new(ingredients: &[Ingredient], selection: &Selection) -> Self {
        let selected: Vec<&Ingredient> = ingredients
            .iter()
            .filter(|ingredient| selection.contains(ingredient.id))
            .collect();

        let fruits = selected.iter().filter(|i| i.is_fruit).count();
        let vegetables = selected.iter().filter(|i| i.is_vegetable).count();

        Self {
            total_checked: selected.len(),
            total_produce: fruits + vegetables,
        }
    }
}
