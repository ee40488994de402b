//! Form widgets for rendering HTML inputs.
//!
//! Widgets render bare inputs. All styling arrives through the `class`
//! attribute the form assembles from the active style.

mod choice;

pub use choice::{CheckboxInput, Select};

use std::collections::BTreeMap;

use crate::field::WidgetKind;

/// Attributes that can be applied to a widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes, rendered in key order.
    pub attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Renders attributes as a leading-space HTML attribute string.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

/// Trait for form widgets that render HTML inputs.
pub trait Widget: Send + Sync {
    /// Renders the widget as HTML.
    ///
    /// # Arguments
    /// * `name` - The field name (used for the name attribute)
    /// * `value` - The current value (if any)
    /// * `attrs` - Additional HTML attributes
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// The rendering category, which picks classes and row templates.
    fn kind(&self) -> WidgetKind {
        WidgetKind::Plain
    }
}

/// A single-line `<input>` such as text, email or password.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// The HTML input type.
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: Option<String>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: None,
        }
    }
}

impl TextInput {
    /// Creates a text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input of the given HTML type.
    pub fn of_type(input_type: impl Into<String>) -> Self {
        Self {
            input_type: input_type.into(),
            placeholder: None,
        }
    }

    /// A password input. Values are never echoed.
    pub fn password() -> Self {
        Self::of_type("password")
    }

    /// An email input.
    pub fn email() -> Self {
        Self::of_type("email")
    }

    /// A number input.
    pub fn number() -> Self {
        Self::of_type("number")
    }

    /// A URL input.
    pub fn url() -> Self {
        Self::of_type("url")
    }

    /// Sets the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for TextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        // Passwords are never echoed back.
        let value_attr = value
            .filter(|v| !v.is_empty() && self.input_type != "password")
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        let placeholder_attr = self
            .placeholder
            .as_ref()
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();
        format!(
            r#"<input type="{}" name="{name}"{value_attr}{placeholder_attr}{}>"#,
            self.input_type,
            attrs.to_html()
        )
    }
}

/// A multi-line `<textarea>`.
#[derive(Debug, Clone)]
pub struct Textarea {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl Default for Textarea {
    fn default() -> Self {
        Self { rows: 10, cols: 40 }
    }
}

impl Textarea {
    /// Creates a textarea with the given number of rows.
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }
}

impl Widget for Textarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let content = value.map(html_escape).unwrap_or_default();
        format!(
            r#"<textarea name="{name}" rows="{}" cols="{}"{}>{content}</textarea>"#,
            self.rows,
            self.cols,
            attrs.to_html()
        )
    }
}

/// A file upload input. Never renders a value.
#[derive(Debug, Clone, Default)]
pub struct FileInput;

impl Widget for FileInput {
    fn render(&self, name: &str, _value: Option<&str>, attrs: &WidgetAttrs) -> String {
        format!(r#"<input type="file" name="{name}"{}>"#, attrs.to_html())
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::File
    }
}

/// A hidden input widget.
#[derive(Debug, Clone, Default)]
pub struct HiddenInput;

impl Widget for HiddenInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let value_attr = value
            .map(|v| format!(r#" value="{}""#, html_escape(v)))
            .unwrap_or_default();
        format!(
            r#"<input type="hidden" name="{name}"{value_attr}{}>"#,
            attrs.to_html()
        )
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Hidden
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
