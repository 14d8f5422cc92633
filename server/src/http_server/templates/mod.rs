use maud::{html, Markup, DOCTYPE};

pub(crate) mod buttons;
pub(crate) mod checklist;
pub(crate) mod recipes;

pub fn head(title: &str) -> Markup {
    html! {
      head {
        meta charset="utf-8";
        meta name="viewport" content="width=device-width, initial-scale=1";
        title { (title) }
        link rel="stylesheet" href="/styles/site.css" {}
      }
    }
}

pub fn footer() -> Markup {
    html! {
      footer class="footer" {
        "Pick what you already have, we'll find what still needs produce."
      }
    }
}

pub fn base(title: &str, inner: Markup) -> Markup {
    html! {
      (DOCTYPE)
      html lang="en" {
        (head(title))

        body class="page" {
          main class="content" {
            (inner)
          }

          (footer())
        }
      }
    }
}

/// Replaces the whole view with a single message.
pub fn error_page(message: &str) -> Markup {
    base(
        "Something went wrong",
        html! {
          p class="error" { "Error: " (message) }
        },
    )
}
