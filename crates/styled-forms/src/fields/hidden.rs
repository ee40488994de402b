//! Hidden field type.

use crate::field::FieldDef;
use crate::widgets::HiddenInput;

/// Creates an optional hidden field without a label.
pub fn hidden_field(name: &str, initial: Option<&str>) -> FieldDef {
    let field = FieldDef::new(name, "", HiddenInput);
    match initial {
        Some(value) => field.initial(value),
        None => field,
    }
}
