//! Text field types.

use crate::field::FieldDef;
use crate::validation::{EmailValidator, MaxLengthValidator, MinLengthValidator, UrlValidator};
use crate::widgets::{TextInput, Textarea};

fn required_if(field: FieldDef, required: bool) -> FieldDef {
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a character field (text input with max length).
pub fn char_field(name: &str, label: &str, max_length: usize, required: bool) -> FieldDef {
    let field = FieldDef::new(name, label, TextInput::new())
        .validator(MaxLengthValidator::new(max_length))
        .attr("maxlength", max_length.to_string());
    required_if(field, required)
}

/// Creates a text field (textarea).
pub fn text_field(name: &str, label: &str, rows: usize, required: bool) -> FieldDef {
    required_if(FieldDef::new(name, label, Textarea::new(rows)), required)
}

/// Creates an email field.
pub fn email_field(name: &str, label: &str, required: bool) -> FieldDef {
    let field = FieldDef::new(name, label, TextInput::email()).validator(EmailValidator);
    required_if(field, required)
}

/// Creates a required password field.
pub fn password_field(name: &str, label: &str, min_length: Option<usize>) -> FieldDef {
    let field = FieldDef::new(name, label, TextInput::password()).required();
    match min_length {
        Some(min) => field.validator(MinLengthValidator::new(min)),
        None => field,
    }
}

/// Creates a URL field.
pub fn url_field(name: &str, label: &str, required: bool) -> FieldDef {
    let field = FieldDef::new(name, label, TextInput::url().placeholder("https://"))
        .validator(UrlValidator);
    required_if(field, required)
}
