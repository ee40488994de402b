//! Number field type.

use crate::field::FieldDef;
use crate::validation::RangeValidator;
use crate::widgets::TextInput;

/// Creates a number field accepting values within the inclusive bounds.
pub fn number_field(
    name: &str,
    label: &str,
    min: Option<f64>,
    max: Option<f64>,
    required: bool,
) -> FieldDef {
    let mut field = FieldDef::new(name, label, TextInput::number())
        .validator(RangeValidator::new(min, max));
    if let Some(min) = min {
        field = field.attr("min", min.to_string());
    }
    if let Some(max) = max {
        field = field.attr("max", max.to_string());
    }
    if required {
        field.required()
    } else {
        field
    }
}
