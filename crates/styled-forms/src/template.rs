//! Row template substitution.
//!
//! Row templates are plain strings with named placeholders such as
//! `{label}` or `{errors}`. Unknown placeholders are left untouched.

/// Values substituted into one field's row template.
#[derive(Debug, Clone, Default)]
pub struct RowContext<'a> {
    /// Rendered `<label>` markup.
    pub label: &'a str,
    /// Rendered input markup.
    pub field: &'a str,
    /// Rendered error fragment, empty when there is nothing to show.
    pub errors: &'a str,
    /// Rendered help text.
    pub help_text: &'a str,
    /// Class added to the row when the field is invalid.
    pub error_class: &'a str,
}

impl RowContext<'_> {
    fn lookup(&self, name: &str) -> Option<&str> {
        match name {
            "label" => Some(self.label),
            "field" => Some(self.field),
            "errors" => Some(self.errors),
            "help_text" => Some(self.help_text),
            "error_class" => Some(self.error_class),
            _ => None,
        }
    }
}

/// Fills `template` with the values of `ctx`.
pub fn fill(template: &str, ctx: &RowContext<'_>) -> String {
    let mut out = String::with_capacity(template.len() + ctx.field.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after
            .find('}')
            .and_then(|close| ctx.lookup(&after[..close]).map(|v| (close, v)));
        match value {
            Some((close, v)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Fills an error-row template, which only knows `{errors}`.
pub fn fill_errors(template: &str, errors: &str) -> String {
    fill(
        template,
        &RowContext {
            errors,
            ..RowContext::default()
        },
    )
}
