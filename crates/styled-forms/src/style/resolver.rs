//! Merging a style definition with per-form overrides.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::css::{CssClasses, CssKey};
use super::registry::StyleRegistry;
use super::{RowTemplateFn, RowTemplateOverrides, RowTemplates, StyleDefinition};
use crate::error::{FormError, Result};
use crate::grid::{GridDialect, GridLayout, GridSpec};

/// Sparse, per-form adjustments to a style.
///
/// Only the values that are set replace the base style's values. CSS-class
/// keys outside the closed [`CssKey`] set are dropped during resolution.
#[derive(Debug, Clone, Default)]
pub struct StyleOverride {
    /// Named style to merge over.
    pub style: Option<String>,
    /// Row/column layout.
    pub grid: Option<GridSpec>,
    /// CSS-class replacements keyed by [`CssKey`] name.
    pub css_classes: BTreeMap<String, String>,
    /// Replaces the base style's separate-error-row flag.
    pub errors_on_separate_row: Option<bool>,
    /// Only the Bootstrap row templates read this flag.
    pub use_form_group_div: Option<bool>,
    /// Row template replacements.
    pub rows: RowTemplateOverrides,
}

#[derive(Debug, Deserialize)]
struct RawOverride {
    style: Option<String>,
    grid: Option<Value>,
    #[serde(default)]
    css_classes: BTreeMap<String, String>,
    errors_on_separate_row: Option<bool>,
    use_form_group_div: Option<bool>,
    #[serde(flatten)]
    unknown: BTreeMap<String, Value>,
}

impl StyleOverride {
    /// Creates an empty override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an override from its JSON object form.
    ///
    /// ```json
    /// {
    ///   "style": "bootstrap",
    ///   "grid": [[["email", 6], ["password", 6]]],
    ///   "css_classes": {"form": "needs-validation"},
    ///   "errors_on_separate_row": false
    /// }
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        let raw = RawOverride::deserialize(value)?;
        for key in raw.unknown.keys() {
            warn!(property = %key, "Ignoring unknown style property");
        }
        let grid = raw.grid.as_ref().map(GridSpec::from_json).transpose()?;
        Ok(Self {
            style: raw.style,
            grid,
            css_classes: raw.css_classes,
            errors_on_separate_row: raw.errors_on_separate_row,
            use_form_group_div: raw.use_form_group_div,
            rows: RowTemplateOverrides::default(),
        })
    }

    /// Parses an override from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }

    /// Forces the named style, keeping every other setting.
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    /// Uses the named style unless one is already set.
    #[must_use]
    pub fn or_style(mut self, name: impl Into<String>) -> Self {
        if self.style.is_none() {
            self.style = Some(name.into());
        }
        self
    }

    /// Sets the grid layout.
    #[must_use]
    pub fn grid(mut self, grid: GridSpec) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Replaces the classes of one CSS-class key.
    #[must_use]
    pub fn css_class(mut self, key: impl Into<String>, classes: impl Into<String>) -> Self {
        self.css_classes.insert(key.into(), classes.into());
        self
    }

    /// Sets whether errors render outside their field's row.
    #[must_use]
    pub fn errors_on_separate_row(mut self, value: bool) -> Self {
        self.errors_on_separate_row = Some(value);
        self
    }

    /// Sets whether normal rows get an input-group wrapper.
    #[must_use]
    pub fn use_form_group_div(mut self, value: bool) -> Self {
        self.use_form_group_div = Some(value);
        self
    }

    /// Replaces the template used for text-like fields.
    #[must_use]
    pub fn normal_row(mut self, template: RowTemplateFn) -> Self {
        self.rows.normal = Some(template);
        self
    }

    /// Replaces the template used for checkboxes.
    #[must_use]
    pub fn checkbox_row(mut self, template: RowTemplateFn) -> Self {
        self.rows.checkbox = Some(template);
        self
    }

    /// Replaces the template used for file inputs.
    #[must_use]
    pub fn file_row(mut self, template: RowTemplateFn) -> Self {
        self.rows.file = Some(template);
        self
    }

    /// Replaces the template used for error fragments.
    #[must_use]
    pub fn error_row(mut self, template: RowTemplateFn) -> Self {
        self.rows.error = Some(template);
        self
    }
}

/// The effective style of one form.
///
/// Built fresh by every resolution and owned by a single form.
#[derive(Debug, Clone)]
pub struct StyleConfig {
    /// Merged class table.
    pub css_classes: CssClasses,
    /// Wrap each normal row in an input-group element.
    pub use_form_group_div: bool,
    /// Render a field's errors next to it instead of inside its row.
    pub errors_on_separate_row: bool,
    /// Merged row templates.
    pub rows: RowTemplates,
    /// Grid bound to the style's dialect.
    pub grid: GridLayout,
}

impl StyleConfig {
    /// The dialect of the grid layout.
    pub fn dialect(&self) -> GridDialect {
        self.grid.dialect()
    }

    /// Row template for text-like fields.
    pub fn normal_row(&self) -> String {
        (self.rows.normal)(self)
    }

    /// Row template for checkboxes.
    pub fn checkbox_row(&self) -> String {
        (self.rows.checkbox)(self)
    }

    /// Row template for file inputs.
    pub fn file_row(&self) -> String {
        (self.rows.file)(self)
    }

    /// Template wrapping joined error text.
    pub fn error_row(&self) -> String {
        (self.rows.error)(self)
    }

    /// Whether error fragments are handed to the grid instead of being
    /// substituted into the row templates.
    pub fn separate_errors(&self) -> bool {
        self.errors_on_separate_row && self.dialect().positions_errors()
    }

    /// The form's base class string.
    pub fn form_class(&self) -> &str {
        self.css_classes.get(CssKey::Form)
    }
}

/// Resolves named styles and overrides into [`StyleConfig`]s.
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'r> {
    registry: &'r StyleRegistry,
}

impl Default for StyleResolver<'static> {
    fn default() -> Self {
        Self::new(StyleRegistry::global())
    }
}

impl<'r> StyleResolver<'r> {
    /// Creates a resolver reading from `registry`.
    pub fn new(registry: &'r StyleRegistry) -> Self {
        Self { registry }
    }

    /// Resolves the style named by the override, or else by `style`, or
    /// else the abstract default, and merges the override over it.
    pub fn resolve(&self, style: Option<&str>, overrides: &StyleOverride) -> Result<StyleConfig> {
        let name = overrides.style.as_deref().or(style);
        let definition = match name {
            Some(name) => self
                .registry
                .get(name)
                .ok_or_else(|| FormError::StyleNotFound {
                    name: name.to_string(),
                })?,
            None => StyleDefinition::default(),
        };
        let config = merge(&definition, overrides)?;
        debug!(
            style = name.unwrap_or("<default>"),
            dialect = %config.dialect(),
            rows = config.grid.spec().rows().len(),
            "Resolved form style"
        );
        Ok(config)
    }

    /// Merges an ad-hoc definition with an override. The override's
    /// `style` name is not consulted and no registry is read.
    pub fn resolve_with(
        definition: &StyleDefinition,
        overrides: &StyleOverride,
    ) -> Result<StyleConfig> {
        merge(definition, overrides)
    }
}

fn merge(definition: &StyleDefinition, overrides: &StyleOverride) -> Result<StyleConfig> {
    let mut css_classes = definition.css_classes.clone();
    let mut known = HashMap::new();
    for (key, value) in &overrides.css_classes {
        match key.parse::<CssKey>() {
            Ok(css_key) => {
                known.insert(css_key, value.as_str());
            }
            Err(_) => warn!(key = %key, "Ignoring unknown CSS class key"),
        }
    }
    for (key, value) in known {
        css_classes.set(key, value);
    }

    let mut rows = definition.rows;
    rows.apply(&overrides.rows);

    let grid = match &overrides.grid {
        Some(spec) => GridLayout::new(definition.dialect, spec.clone())?,
        None => GridLayout::flat(definition.dialect),
    };

    Ok(StyleConfig {
        css_classes,
        use_form_group_div: overrides
            .use_form_group_div
            .unwrap_or(definition.use_form_group_div),
        errors_on_separate_row: overrides
            .errors_on_separate_row
            .unwrap_or(definition.errors_on_separate_row),
        rows,
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> StyleRegistry {
        StyleRegistry::with_builtins()
    }

    #[test]
    fn test_override_replaces_known_keys_only() {
        let registry = registry();
        let overrides = StyleOverride::new()
            .css_class("form", "needs-validation")
            .css_class("label_file", "custom-file-label");
        let config = StyleResolver::new(&registry)
            .resolve(Some("bootstrap"), &overrides)
            .unwrap();
        let bootstrap = registry.get("bootstrap").unwrap();

        for (key, value) in config.css_classes.iter() {
            if key == CssKey::Form {
                assert_eq!(value, "needs-validation");
            } else {
                assert_eq!(value, bootstrap.css_classes.get(key));
            }
        }
        assert!(config.css_classes.iter().all(|(_, v)| v != "custom-file-label"));
    }

    #[test]
    fn test_override_style_wins() {
        let registry = registry();
        let overrides = StyleOverride::new().with_style("semanticui");
        let config = StyleResolver::new(&registry)
            .resolve(Some("bootstrap"), &overrides)
            .unwrap();
        assert_eq!(config.dialect(), GridDialect::SemanticUi);
        assert!(config.errors_on_separate_row);
    }

    #[test]
    fn test_or_style_keeps_existing() {
        let overrides = StyleOverride::new().with_style("semanticui").or_style("bootstrap");
        assert_eq!(overrides.style.as_deref(), Some("semanticui"));
        let overrides = StyleOverride::new().or_style("bootstrap");
        assert_eq!(overrides.style.as_deref(), Some("bootstrap"));
    }

    #[test]
    fn test_missing_style_is_fatal() {
        let registry = registry();
        let err = StyleResolver::new(&registry)
            .resolve(None, &StyleOverride::new().with_style("foundation"))
            .unwrap_err();
        assert!(matches!(err, FormError::StyleNotFound { name } if name == "foundation"));
    }

    #[test]
    fn test_no_style_uses_default() {
        let registry = registry();
        let config = StyleResolver::new(&registry)
            .resolve(None, &StyleOverride::new())
            .unwrap();
        assert_eq!(config.dialect(), GridDialect::Default);
        assert_eq!(config.form_class(), "form");
        assert!(config.grid.spec().is_empty());
    }

    #[test]
    fn test_flag_overrides() {
        let registry = registry();
        let overrides = StyleOverride::new()
            .errors_on_separate_row(false)
            .use_form_group_div(true);
        let config = StyleResolver::new(&registry)
            .resolve(Some("semanticui"), &overrides)
            .unwrap();
        assert!(!config.errors_on_separate_row);
        assert!(config.use_form_group_div);
        assert!(!config.separate_errors());
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let registry = registry();
        let resolver = StyleResolver::new(&registry);
        let overrides = StyleOverride::new()
            .with_style("bootstrap")
            .css_class("input", "form-control form-control-sm")
            .grid(GridSpec::new().row([("a", 6), ("b", 6)]));

        let first = resolver.resolve(None, &overrides).unwrap();
        let _other = resolver
            .resolve(None, &StyleOverride::new().with_style("semanticui"))
            .unwrap();
        let second = resolver.resolve(None, &overrides).unwrap();

        assert_eq!(first.css_classes, second.css_classes);
        assert_eq!(first.dialect(), second.dialect());
        assert_eq!(first.grid, second.grid);
    }

    #[test]
    fn test_grid_width_checked_at_resolution() {
        let registry = registry();
        let overrides = StyleOverride::new()
            .with_style("bootstrap")
            .grid(GridSpec::new().row([("a", 13)]));
        let err = StyleResolver::new(&registry)
            .resolve(None, &overrides)
            .unwrap_err();
        assert!(matches!(err, FormError::InvalidGridWidth { width: 13, max: 12, .. }));
    }

    #[test]
    fn test_from_json() {
        let overrides = StyleOverride::from_json(&json!({
            "style": "semanticui",
            "grid": [[["first_name", 8], ["last_name", 8]]],
            "css_classes": {"form": "ui form inline", "nonsense": "x"},
            "errors_on_separate_row": false,
            "fields_per_row": 2
        }))
        .unwrap();
        assert_eq!(overrides.style.as_deref(), Some("semanticui"));
        assert_eq!(overrides.errors_on_separate_row, Some(false));
        assert_eq!(overrides.use_form_group_div, None);

        let registry = registry();
        let config = StyleResolver::new(&registry).resolve(None, &overrides).unwrap();
        assert_eq!(config.form_class(), "ui form inline");
        assert_eq!(config.grid.spec().rows().len(), 1);
    }

    #[test]
    fn test_from_json_str_errors() {
        assert!(matches!(
            StyleOverride::from_json_str("{not json"),
            Err(FormError::Json(_))
        ));
        assert!(matches!(
            StyleOverride::from_json_str(r#"{"grid": [[["a", 1.5]]]}"#),
            Err(FormError::InvalidGridWidthType { .. })
        ));
    }

    #[test]
    fn test_row_template_override() {
        fn compact(_: &StyleConfig) -> String {
            "{label}{field}".to_string()
        }
        let registry = registry();
        let config = StyleResolver::new(&registry)
            .resolve(Some("bootstrap"), &StyleOverride::new().normal_row(compact))
            .unwrap();
        assert_eq!(config.normal_row(), "{label}{field}");
        assert!(config.checkbox_row().contains("form-check"));
    }

    #[test]
    fn test_resolve_with_ad_hoc_definition() {
        let mut house = StyleDefinition::default();
        house.css_classes.set(CssKey::Input, "house-input");
        let config = StyleResolver::resolve_with(
            &house,
            &StyleOverride::new().css_class("label", "house-label"),
        )
        .unwrap();
        assert_eq!(config.css_classes.get(CssKey::Input), "house-input");
        assert_eq!(config.css_classes.get(CssKey::Label), "house-label");
    }
}
