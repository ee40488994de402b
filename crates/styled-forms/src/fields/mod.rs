//! Constructors for commonly used fields.

mod checkbox;
mod file;
mod hidden;
mod number;
mod select;
mod text;

pub use checkbox::boolean_field;
pub use file::file_field;
pub use hidden::hidden_field;
pub use number::number_field;
pub use select::choice_field;
pub use text::{char_field, email_field, password_field, text_field, url_field};
