use maud::{html, Markup, Render};

pub enum ButtonType {
    Primary,
    Secondary,
}

impl ButtonType {
    fn classes(&self) -> &str {
        match &self {
            ButtonType::Primary => "button button-primary",
            ButtonType::Secondary => "button button-secondary",
        }
    }
}

/// A form submit button.
pub struct SubmitButton {
    label: &'static str,
    button_type: ButtonType,
}

impl SubmitButton {
    pub fn primary(label: &'static str) -> Self {
        Self {
            label,
            button_type: ButtonType::Primary,
        }
    }
}

impl Render for SubmitButton {
    fn render(&self) -> Markup {
        html! {
          button type="submit" class=(self.button_type.classes()) { (self.label) }
        }
    }
}

pub struct LinkButton {
    label: &'static str,
    href: &'static str,
    button_type: ButtonType,
}

impl LinkButton {
    pub fn secondary(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            button_type: ButtonType::Secondary,
        }
    }
}

impl Render for LinkButton {
    fn render(&self) -> Markup {
        html! {
          a href=(self.href) class=(self.button_type.classes()) { (self.label) }
        }
    }
}
