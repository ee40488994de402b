//! Checkbox field type.

use crate::field::FieldDef;
use crate::widgets::CheckboxInput;

/// Creates an optional boolean field (checkbox).
pub fn boolean_field(name: &str, label: &str) -> FieldDef {
    FieldDef::new(name, label, CheckboxInput)
}
