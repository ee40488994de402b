//! Process-wide registry of named styles.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::info;

use super::{builtin, StyleDefinition};

static GLOBAL: Lazy<StyleRegistry> = Lazy::new(StyleRegistry::with_builtins);

/// A mapping from style name to [`StyleDefinition`].
///
/// Registration takes a write lock; lookups only take a read lock and hand
/// out clones, so a definition can never change under a render in progress.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    styles: RwLock<HashMap<String, StyleDefinition>>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `"bootstrap"` and `"semanticui"`.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("bootstrap", builtin::bootstrap());
        registry.register("semanticui", builtin::semantic_ui());
        registry
    }

    /// The registry shared by the whole process, pre-populated with the
    /// built-in styles.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers `definition` under `name`, replacing any previous entry.
    pub fn register(&self, name: impl Into<String>, definition: StyleDefinition) {
        let name = name.into();
        let mut styles = self.styles.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = styles.insert(name.clone(), definition).is_some();
        info!(style = %name, replaced, "Registered form style");
    }

    /// Looks up a style by name.
    pub fn get(&self, name: &str) -> Option<StyleDefinition> {
        self.styles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Returns whether a style is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.styles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .styles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridDialect;
    use crate::style::CssKey;

    #[test]
    fn test_builtins_registered() {
        let registry = StyleRegistry::with_builtins();
        assert_eq!(registry.names(), ["bootstrap", "semanticui"]);
        assert_eq!(
            registry.get("bootstrap").map(|s| s.dialect),
            Some(GridDialect::Bootstrap)
        );
        assert!(registry.get("foundation").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let registry = StyleRegistry::new();
        registry.register("house", StyleDefinition::default());
        let mut house = StyleDefinition::default();
        house.css_classes.set(CssKey::Form, "house-form");
        registry.register("house", house);

        let stored = registry.get("house").unwrap();
        assert_eq!(stored.css_classes.get(CssKey::Form), "house-form");
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn test_lookup_returns_copy() {
        let registry = StyleRegistry::with_builtins();
        let mut copy = registry.get("bootstrap").unwrap();
        copy.css_classes.set(CssKey::Input, "changed");
        assert_eq!(
            registry.get("bootstrap").unwrap().css_classes.get(CssKey::Input),
            "form-control"
        );
    }

    #[test]
    fn test_global_registry() {
        assert!(StyleRegistry::global().contains("bootstrap"));
        assert!(StyleRegistry::global().contains("semanticui"));
    }
}
