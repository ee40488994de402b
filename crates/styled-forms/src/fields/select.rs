//! Select field type.

use crate::field::FieldDef;
use crate::validation::ChoiceValidator;
use crate::widgets::Select;

/// Creates a choice field (select/dropdown) that only accepts its own values.
pub fn choice_field(
    name: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldDef {
    let allowed = ChoiceValidator::new(choices.iter().map(|(value, _)| *value));
    let field = FieldDef::new(name, label, Select::new(choices)).validator(allowed);
    if required {
        field.required()
    } else {
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_field() {
        let choices = vec![("draft", "Draft"), ("published", "Published")];
        let field = choice_field("status", "Status", choices, true);
        assert_eq!(field.name, "status");
        assert!(field.required);
        assert!(field.validators[0].validate("published").is_ok());
        assert!(field.validators[0].validate("archived").is_err());
    }
}
