//! Choice widgets: selects and checkboxes.

use super::{html_escape, Widget, WidgetAttrs};
use crate::field::WidgetKind;

/// A `<select>` dropdown.
#[derive(Debug, Clone)]
pub struct Select {
    /// Available choices (value, label).
    pub choices: Vec<(String, String)>,
    /// Whether to include an empty option.
    pub include_blank: bool,
    /// Label for blank option.
    pub blank_label: String,
}

impl Default for Select {
    fn default() -> Self {
        Self {
            choices: Vec::new(),
            include_blank: true,
            blank_label: "---------".to_string(),
        }
    }
}

impl Select {
    /// Creates a new select with the given choices.
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(v, l)| (v.into(), l.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Disables the blank option.
    #[must_use]
    pub fn no_blank(mut self) -> Self {
        self.include_blank = false;
        self
    }
}

impl Widget for Select {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut options = String::new();

        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }

        for (opt_value, label) in &self.choices {
            let selected = value.is_some_and(|v| v == opt_value);
            let selected_attr = if selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(opt_value),
                html_escape(label)
            ));
        }

        format!(r#"<select name="{name}"{}>{options}</select>"#, attrs.to_html())
    }
}

/// A single checkbox. Checked when the value is `true`, `on` or `1`.
#[derive(Debug, Clone, Default)]
pub struct CheckboxInput;

impl CheckboxInput {
    /// Whether a submitted or initial value means "checked".
    pub fn is_checked(value: &str) -> bool {
        matches!(value, "true" | "on" | "1")
    }
}

impl Widget for CheckboxInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let checked_attr = if value.is_some_and(Self::is_checked) {
            " checked"
        } else {
            ""
        };
        format!(
            r#"<input type="checkbox" name="{name}"{checked_attr}{}>"#,
            attrs.to_html()
        )
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Checkbox
    }
}
