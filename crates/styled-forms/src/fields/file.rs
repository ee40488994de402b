//! File upload field type.

use crate::field::FieldDef;
use crate::widgets::FileInput;

/// Creates a file field. The cleaned value is the submitted file name.
pub fn file_field(name: &str, label: &str, required: bool) -> FieldDef {
    let field = FieldDef::new(name, label, FileInput);
    if required {
        field.required()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::WidgetKind;

    #[test]
    fn test_file_field() {
        let field = file_field("avatar", "Avatar", false);
        assert_eq!(field.kind(), WidgetKind::File);
        assert!(!field.required);
    }
}
