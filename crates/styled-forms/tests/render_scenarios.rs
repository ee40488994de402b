//! End-to-end rendering of bound forms under the built-in styles.

mod common;

use common::{data, position, render, two_field_form};
use styled_forms::fields::{boolean_field, char_field, file_field, hidden_field, number_field};
use styled_forms::validation::RegexValidator;
use styled_forms::{
    FormBuilder, FormError, GridSpec, StyleOverride, StyleRegistry, REQUIRED_MESSAGE,
};

// =============================================================================
// Validity classes
// =============================================================================

#[test]
fn test_required_field_empty_is_invalid() {
    let mut form = FormBuilder::new()
        .field(char_field("name", "Name", 20, true))
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("name", "")]));

    let html = render(&mut form);
    assert!(html.contains(r#"class="form-control is-invalid""#));
    assert!(html.contains(&format!(
        r#"<div class="invalid-feedback d-block">{REQUIRED_MESSAGE}</div>"#
    )));
}

#[test]
fn test_required_field_filled_is_valid() {
    let mut form = FormBuilder::new()
        .field(char_field("name", "Name", 20, true))
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("name", "Ada")]));

    let html = render(&mut form);
    assert!(html.contains(r#"class="form-control is-valid""#));
    assert!(!html.contains("invalid-feedback"));
    assert!(html.contains(r#"value="Ada""#));
}

#[test]
fn test_every_error_message_is_rendered() {
    let mut form = FormBuilder::new()
        .field(
            char_field("code", "Code", 3, true)
                .validator(|v: &str| {
                    if v.chars().all(char::is_numeric) {
                        Ok(())
                    } else {
                        Err("Digits only.".to_string())
                    }
                }),
        )
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("code", "abcd")]));

    assert!(!form.is_valid());
    assert_eq!(form.errors().get("code").unwrap().len(), 2);
    let html = render(&mut form);
    assert!(html.contains("Ensure this value has at most 3 characters.<br>Digits only."));
}

#[test]
fn test_pattern_and_range_checks() {
    let zip = RegexValidator::new(r"^\d{5}$", "Please provide a valid zip.").unwrap();
    let mut form = FormBuilder::new()
        .field(char_field("zip", "Zip", 10, true).validator(zip))
        .field(number_field("age", "Age", Some(18.0), Some(120.0), false))
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("zip", "1234"), ("age", "16")]));

    assert!(!form.is_valid());
    let rendered = form.render().unwrap();
    assert!(rendered
        .field("zip")
        .unwrap()
        .contains("Please provide a valid zip."));
    let age = rendered.field("age").unwrap();
    assert!(age.contains(r#"type="number""#));
    assert!(age.contains("Ensure this value is greater than or equal to 18."));

    form.bind(data(&[("zip", "75001"), ("age", "")]));
    assert!(form.is_valid());
}

#[test]
fn test_error_text_is_escaped() {
    let mut form = FormBuilder::new()
        .field(char_field("name", "Name", 20, false).clean_with(|_| Err("<b>bad</b>".to_string())))
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("name", "x")]));

    let html = render(&mut form);
    assert!(html.contains("&lt;b&gt;bad&lt;/b&gt;"));
    assert!(!html.contains("<b>bad</b>"));
}

#[test]
fn test_checkbox_and_file_rows() {
    let mut form = FormBuilder::new()
        .field(boolean_field("agree", "I agree").required())
        .field(file_field("avatar", "Avatar", false))
        .bootstrap()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("agree", "on")]));

    let rendered = form.render().unwrap();
    let agree = rendered.field("agree").unwrap();
    assert!(agree.contains(r#"<div class="form-check">"#));
    assert!(agree.contains("form-check-input is-valid"));
    assert!(agree.contains(" checked"));
    let avatar = rendered.field("avatar").unwrap();
    assert!(avatar.contains("form-control-file is-valid"));
    assert_eq!(form.cleaned_data()["agree"], "true");
}

// =============================================================================
// Grid layouts
// =============================================================================

#[test]
fn test_bootstrap_grid_columns() {
    let overrides = StyleOverride::new().grid(GridSpec::new().row([("a", 6), ("b", 6)]));
    let mut form = two_field_form("bootstrap", overrides);
    form.bind(data(&[("a", "1"), ("b", "2")]));

    let rendered = form.render().unwrap();
    let a = format!(r#"<div class="col-6">{}</div>"#, rendered.field("a").unwrap());
    let b = format!(r#"<div class="col-6">{}</div>"#, rendered.field("b").unwrap());
    assert!(position(&rendered.html, &a) < position(&rendered.html, &b));
    assert!(rendered.html.starts_with(r#"<div class="form-row">"#));
    assert!(rendered.html.ends_with(r#"<div class="form-row"></div>"#));
}

#[test]
fn test_semantic_grid_keeps_error_next_to_field() {
    let overrides = StyleOverride::new()
        .grid(GridSpec::new().row([("a", 6), ("b", 6)]))
        .errors_on_separate_row(true);
    let mut form = two_field_form("semanticui", overrides);
    form.bind(data(&[("a", "1"), ("b", "")]));

    let rendered = form.render().unwrap();
    let b = rendered.field("b").unwrap();
    assert!(!b.contains(REQUIRED_MESSAGE));
    let error = format!("<p>{REQUIRED_MESSAGE}</p>");
    let b_at = position(&rendered.html, b);
    let error_at = position(&rendered.html, &error);
    assert!(rendered.html[b_at + b.len()..].trim_start().starts_with(r#"<div class="ui error message">"#));
    assert!(b_at < error_at);
    assert!(rendered.html.contains(r#"<div class="six wide field">"#));
    assert!(rendered.html.contains(r#"<div class="field"><div class="fields">"#));
}

#[test]
fn test_semantic_inline_errors_when_not_separated() {
    let overrides = StyleOverride::new().errors_on_separate_row(false);
    let mut form = two_field_form("semanticui", overrides);
    form.bind(data(&[("a", "1"), ("b", "")]));

    let rendered = form.render().unwrap();
    assert!(rendered.field("b").unwrap().contains(REQUIRED_MESSAGE));
    assert!(rendered.field("b").unwrap().contains(r#"<div class="field error">"#));
}

#[test]
fn test_unmentioned_fields_render_in_trailing_row() {
    let overrides = StyleOverride::new().grid(GridSpec::new().row([("b", 12)]));
    let mut form = two_field_form("bootstrap", overrides);

    let rendered = form.render().unwrap();
    let b = format!(r#"<div class="col-12">{}</div>"#, rendered.field("b").unwrap());
    let a = format!(r#"<div class="col">{}</div>"#, rendered.field("a").unwrap());
    assert!(position(&rendered.html, &b) < position(&rendered.html, &a));
}

#[test]
fn test_unknown_grid_field_fails_render() {
    let overrides = StyleOverride::new().grid(GridSpec::new().row([("missing", 6)]));
    let mut form = two_field_form("bootstrap", overrides);
    assert!(matches!(
        form.render(),
        Err(FormError::UnknownGridField(name)) if name == "missing"
    ));
}

#[test]
fn test_no_grid_renders_fields_in_order() {
    let mut form = two_field_form("bootstrap", StyleOverride::new());
    let rendered = form.render().unwrap();

    let expected = rendered
        .fields
        .iter()
        .map(|(_, html)| html.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    assert_eq!(rendered.html, expected);
    assert!(!rendered.html.contains("form-row"));
    assert_eq!(rendered.fields[0].0, "a");
    assert_eq!(rendered.fields[1].0, "b");
}

// =============================================================================
// Hidden fields and top-level errors
// =============================================================================

#[test]
fn test_hidden_fields_trail_the_grid() {
    let overrides = StyleOverride::new().grid(GridSpec::new().row([("a", 6), ("b", 6)]));
    let mut form = FormBuilder::new()
        .field(char_field("a", "A", 20, false))
        .field(hidden_field("next", Some("/home")))
        .field(char_field("b", "B", 20, false))
        .bootstrap()
        .overrides(overrides)
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();

    let rendered = form.render().unwrap();
    assert_eq!(rendered.fields.len(), 2);
    assert_eq!(
        rendered.hidden_fields,
        r#"<input type="hidden" name="next" value="/home" id="id_next">"#
    );
    assert!(rendered
        .html
        .ends_with(&format!(r#"<div class="form-row">{}</div>"#, rendered.hidden_fields)));
}

#[test]
fn test_top_errors_precede_body() {
    let mut form = FormBuilder::new()
        .field(char_field("a", "A", 20, false))
        .field(hidden_field("token", None).required())
        .clean(|_| {
            let mut errors = styled_forms::ValidationErrors::new();
            errors.add_non_field("Something went wrong.");
            Err(errors)
        })
        .semantic_ui()
        .build_in(&StyleRegistry::with_builtins())
        .unwrap();
    form.bind(data(&[("a", "x")]));

    let rendered = form.render().unwrap();
    assert!(rendered.html.starts_with(&rendered.top_errors));
    let general = position(&rendered.top_errors, "Something went wrong.");
    let hidden = position(
        &rendered.top_errors,
        &format!("(Hidden field token) {REQUIRED_MESSAGE}"),
    );
    assert!(general < hidden);
    assert_eq!(rendered.top_errors.matches("ui error message").count(), 1);
}

#[test]
fn test_form_tag_carries_form_classes() {
    let mut form = two_field_form("semanticui", StyleOverride::new());
    form.bind(data(&[("a", "1")]));
    assert!(!form.is_valid());

    let html = form.as_form("/submit", "post").unwrap();
    assert!(html.starts_with("<form"));
    assert!(html.contains(r#"class="ui form error""#));
    assert!(html.ends_with("</form>"));
}
