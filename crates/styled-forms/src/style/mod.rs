//! Named styles, the style registry and style resolution.
//!
//! A [`StyleDefinition`] is an immutable bundle of CSS-class choices,
//! layout flags and row templates for one markup convention. Definitions
//! live in a [`StyleRegistry`] under a name; a [`StyleResolver`] merges one
//! of them with a per-form [`StyleOverride`] into the [`StyleConfig`] that a
//! single form owns.

mod builtin;
mod css;
mod registry;
mod resolver;

pub use builtin::{bootstrap, semantic_ui};
pub use css::{ClassList, CssClasses, CssKey, UnknownCssKey};
pub use registry::StyleRegistry;
pub use resolver::{StyleConfig, StyleOverride, StyleResolver};

use crate::grid::GridDialect;

/// Builds a row template from the resolved configuration.
///
/// The returned string may contain the placeholders `{label}`, `{field}`,
/// `{errors}`, `{help_text}` and `{error_class}`.
pub type RowTemplateFn = fn(&StyleConfig) -> String;

/// The row templates of a style.
#[derive(Debug, Clone, Copy)]
pub struct RowTemplates {
    /// Text-like inputs, selects and textareas.
    pub normal: RowTemplateFn,
    /// Checkbox inputs.
    pub checkbox: RowTemplateFn,
    /// File inputs.
    pub file: RowTemplateFn,
    /// Error fragments; only `{errors}` is substituted.
    pub error: RowTemplateFn,
}

/// Sparse replacement for some of a style's row templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowTemplateOverrides {
    /// Replaces [`RowTemplates::normal`].
    pub normal: Option<RowTemplateFn>,
    /// Replaces [`RowTemplates::checkbox`].
    pub checkbox: Option<RowTemplateFn>,
    /// Replaces [`RowTemplates::file`].
    pub file: Option<RowTemplateFn>,
    /// Replaces [`RowTemplates::error`].
    pub error: Option<RowTemplateFn>,
}

impl RowTemplates {
    fn apply(&mut self, overrides: &RowTemplateOverrides) {
        if let Some(normal) = overrides.normal {
            self.normal = normal;
        }
        if let Some(checkbox) = overrides.checkbox {
            self.checkbox = checkbox;
        }
        if let Some(file) = overrides.file {
            self.file = file;
        }
        if let Some(error) = overrides.error {
            self.error = error;
        }
    }
}

/// A named bundle of CSS classes, layout flags and row templates.
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    /// Class names per semantic key.
    pub css_classes: CssClasses,
    /// Grid dialect used to lay out rows and columns.
    pub dialect: GridDialect,
    /// Wrap each normal row in an input-group element.
    pub use_form_group_div: bool,
    /// Render a field's errors next to it instead of inside its row.
    pub errors_on_separate_row: bool,
    /// Row templates.
    pub rows: RowTemplates,
}

impl Default for StyleDefinition {
    /// The abstract base style every named style is merged over.
    fn default() -> Self {
        builtin::base()
    }
}
