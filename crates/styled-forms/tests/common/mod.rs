#![allow(dead_code)]

use std::collections::HashMap;

use styled_forms::fields::char_field;
use styled_forms::{FormBuilder, StyleOverride, StyleRegistry, StyledForm};

pub fn data(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// A form with required text fields `a` and `b` under the named style.
pub fn two_field_form(style: &str, overrides: StyleOverride) -> StyledForm {
    FormBuilder::new()
        .field(char_field("a", "A", 20, true))
        .field(char_field("b", "B", 20, true))
        .style(style)
        .overrides(overrides)
        .build_in(&StyleRegistry::with_builtins())
        .unwrap_or_else(|e| panic!("Failed to build {style} form: {e}"))
}

pub fn render(form: &mut StyledForm) -> String {
    form.as_html()
        .unwrap_or_else(|e| panic!("Failed to render form: {e}"))
}

/// Byte offset of `needle` in `haystack`, panicking when absent.
pub fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("Expected to find {needle:?} in:\n{haystack}"))
}
