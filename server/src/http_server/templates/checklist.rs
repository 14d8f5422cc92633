use db::{Ingredient, Location};
use maud::{html, Markup, Render};

use super::buttons::{LinkButton, SubmitButton};
use crate::ranking::{Selection, SelectionSummary};

/// The ingredient checkboxes, location picker and running totals, wrapped
/// in the form that posts back to the home page.
pub struct Checklist<'a> {
    pub ingredients: &'a [Ingredient],
    pub locations: &'a [Location],
    pub selection: &'a Selection,
    pub location_id: Option<i32>,
}

impl Render for Checklist<'_> {
    fn render(&self) -> Markup {
        let summary = SelectionSummary::new(self.ingredients, self.selection);

        html! {
          form method="post" action="/" class="checklist" {
            h2 { "Ingredients" }

            ul class="ingredient-grid" {
              @for ingredient in self.ingredients {
                li {
                  label {
                    input
                      type="checkbox"
                      name="ingredientIds"
                      value=(ingredient.id)
                      checked[self.selection.contains(ingredient.id)];
                    span { (ingredient.name) }
                  }
                }
              }
            }

            label class="location-picker" {
              "Location "
              select name="locationId" {
                option value="" selected[self.location_id.is_none()] { "All locations" }
                @for location in self.locations {
                  option value=(location.id) selected[self.location_id == Some(location.id)] {
                    (location.name)
                  }
                }
              }
            }

            div class="total" { "Total Selected Ingredients: " (summary.total_checked) }
            div class="total total-produce" {
              "Total Fruits and Veggies Selected: " (summary.total_produce)
            }

            div class="actions" {
              (SubmitButton::primary("Check for recipe or menu ideas"))
              (LinkButton::secondary("Start over", "/"))
            }
          }
        }
    }
}
