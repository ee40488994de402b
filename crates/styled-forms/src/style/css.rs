//! CSS class tables and append-only class lists.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The closed set of semantic CSS-class keys a style can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CssKey {
    Form,
    ValidatedForm,
    ValidForm,
    InvalidForm,
    Input,
    InputCheckbox,
    InputFile,
    Label,
    LabelCheckbox,
    InputGroup,
    InputGroupCheckbox,
    ValidInput,
    InvalidInput,
}

impl CssKey {
    /// Every recognized key, in table order.
    pub const ALL: [Self; 13] = [
        Self::Form,
        Self::ValidatedForm,
        Self::ValidForm,
        Self::InvalidForm,
        Self::Input,
        Self::InputCheckbox,
        Self::InputFile,
        Self::Label,
        Self::LabelCheckbox,
        Self::InputGroup,
        Self::InputGroupCheckbox,
        Self::ValidInput,
        Self::InvalidInput,
    ];

    /// The key's name as used in declarative configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::ValidatedForm => "validated_form",
            Self::ValidForm => "valid_form",
            Self::InvalidForm => "invalid_form",
            Self::Input => "input",
            Self::InputCheckbox => "input_checkbox",
            Self::InputFile => "input_file",
            Self::Label => "label",
            Self::LabelCheckbox => "label_checkbox",
            Self::InputGroup => "input_group",
            Self::InputGroupCheckbox => "input_group_checkbox",
            Self::ValidInput => "valid_input",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for CssKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a configuration key is not one of [`CssKey::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCssKey(pub String);

impl FromStr for CssKey {
    type Err = UnknownCssKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownCssKey(s.to_string()))
    }
}

/// A complete CSS-class table: one class string per [`CssKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssClasses {
    classes: BTreeMap<CssKey, String>,
}

impl CssClasses {
    /// Builds a table from `(key, classes)` pairs. Missing keys map to "".
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (CssKey, &'a str)>) -> Self {
        let mut classes: BTreeMap<CssKey, String> =
            CssKey::ALL.into_iter().map(|k| (k, String::new())).collect();
        for (key, value) in pairs {
            classes.insert(key, value.to_string());
        }
        Self { classes }
    }

    /// Returns the classes assigned to `key`.
    pub fn get(&self, key: CssKey) -> &str {
        self.classes.get(&key).map_or("", String::as_str)
    }

    /// Replaces the classes assigned to `key`.
    pub fn set(&mut self, key: CssKey, value: impl Into<String>) {
        self.classes.insert(key, value.into());
    }

    /// Iterates over the table in key order.
    pub fn iter(&self) -> impl Iterator<Item = (CssKey, &str)> {
        self.classes.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// A space-joined class string that only ever grows.
///
/// Empty tokens are skipped; repeated tokens are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated token of `classes`.
    pub fn push(&mut self, classes: &str) {
        self.tokens
            .extend(classes.split_whitespace().map(str::to_string));
    }

    /// Returns whether `token` has been added.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Returns whether no token has been added.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = Self::new();
        list.push(classes);
        list
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in CssKey::ALL {
            assert_eq!(key.as_str().parse::<CssKey>(), Ok(key));
        }
        assert_eq!(
            "label_file".parse::<CssKey>(),
            Err(UnknownCssKey("label_file".into()))
        );
    }

    #[test]
    fn test_table_defaults_to_empty() {
        let table = CssClasses::from_pairs([(CssKey::Input, "form-control")]);
        assert_eq!(table.get(CssKey::Input), "form-control");
        assert_eq!(table.get(CssKey::Label), "");
        assert_eq!(table.iter().count(), CssKey::ALL.len());
    }

    #[test]
    fn test_class_list_appends() {
        let mut list = ClassList::from("mb-2  mr-sm-2");
        list.push("");
        list.push("form-control");
        list.push("is-valid");
        list.push("is-valid");
        assert_eq!(list.to_string(), "mb-2 mr-sm-2 form-control is-valid is-valid");
        assert!(list.contains("form-control"));
    }
}
