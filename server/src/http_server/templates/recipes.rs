use maud::{html, Markup, Render};

use crate::ranking::{produce_ingredients, RankedRecipe};

/// Ranked results. `None` means nothing has been submitted yet.
pub struct RankedRecipeList<'a>(pub Option<&'a [RankedRecipe]>);

impl Render for RankedRecipeList<'_> {
    fn render(&self) -> Markup {
        html! {
          h2 { "Recipes" }

          @match self.0 {
            None => {}
            Some([]) => {
              p class="empty" { "No recipes found for this location." }
            }
            Some(ranked) => {
              ul class="recipes" {
                @for ranked_recipe in ranked {
                  (RankedRecipeItem(ranked_recipe))
                }
              }
            }
          }
        }
    }
}

struct RankedRecipeItem<'a>(&'a RankedRecipe);

impl Render for RankedRecipeItem<'_> {
    fn render(&self) -> Markup {
        let recipe = &self.0.recipe;

        html! {
          li class="recipe" {
            span class="recipe-location" { (recipe.location.name) }
            " "
            span class="recipe-name" { (recipe.item_name) }
            div class="recipe-count" { "More fruits & veggies: " (self.0.non_matching_count) }

            details {
              summary {
                span class="show-label" { "See All Ingredients" }
                span class="hide-label" { "Hide Ingredients" }
              }
              ul class="recipe-produce" {
                @for ingredient in produce_ingredients(recipe) {
                  li { (ingredient.name) }
                }
              }
            }
          }
        }
    }
}
