//! Built-in styles: the abstract base, Bootstrap and Semantic UI.

use super::css::{CssClasses, CssKey};
use super::{RowTemplates, StyleConfig, StyleDefinition};
use crate::grid::GridDialect;

pub(crate) fn base() -> StyleDefinition {
    StyleDefinition {
        css_classes: CssClasses::from_pairs([
            (CssKey::Form, "form"),
            (CssKey::ValidatedForm, "validated-form"),
            (CssKey::ValidForm, ""),
            (CssKey::InvalidForm, ""),
            (CssKey::Input, "input"),
            (CssKey::InputCheckbox, "input-checkbox"),
            (CssKey::InputFile, "input-file"),
            (CssKey::Label, "label"),
            (CssKey::LabelCheckbox, "label-checkbox"),
            (CssKey::InputGroup, "input-group"),
            (CssKey::InputGroupCheckbox, "input-group-checkbox"),
            (CssKey::ValidInput, "valid-input"),
            (CssKey::InvalidInput, "invalid-input"),
        ]),
        dialect: GridDialect::Default,
        use_form_group_div: true,
        errors_on_separate_row: false,
        rows: RowTemplates {
            normal: default_row,
            checkbox: default_row,
            file: default_row,
            error: plain_errors,
        },
    }
}

/// The Bootstrap style, registered as `"bootstrap"`.
pub fn bootstrap() -> StyleDefinition {
    StyleDefinition {
        css_classes: CssClasses::from_pairs([
            (CssKey::Input, "form-control"),
            (CssKey::InputCheckbox, "form-check-input"),
            (CssKey::InputFile, "form-control-file"),
            (CssKey::LabelCheckbox, "form-check-label"),
            (CssKey::InputGroup, "form-group"),
            (CssKey::InputGroupCheckbox, "form-check"),
            (CssKey::ValidInput, "is-valid"),
            (CssKey::InvalidInput, "is-invalid"),
        ]),
        dialect: GridDialect::Bootstrap,
        use_form_group_div: true,
        errors_on_separate_row: false,
        rows: RowTemplates {
            normal: bootstrap_normal_row,
            checkbox: bootstrap_checkbox_row,
            file: default_row,
            error: bootstrap_errors,
        },
    }
}

/// The Semantic UI style, registered as `"semanticui"`.
pub fn semantic_ui() -> StyleDefinition {
    StyleDefinition {
        css_classes: CssClasses::from_pairs([
            (CssKey::Form, "ui form"),
            (CssKey::InvalidForm, "error"),
            (CssKey::InputGroup, "field"),
            (CssKey::InputGroupCheckbox, "ui checkbox field"),
            (CssKey::InvalidInput, "error"),
        ]),
        dialect: GridDialect::SemanticUi,
        use_form_group_div: false,
        errors_on_separate_row: true,
        rows: RowTemplates {
            normal: semantic_normal_row,
            checkbox: semantic_checkbox_row,
            file: default_row,
            error: semantic_errors,
        },
    }
}

fn default_row(style: &StyleConfig) -> String {
    format!(
        r#"
<div class="{}">
    {{label}}
    {{field}}
    {{errors}}
    {{help_text}}
</div>
"#,
        style.css_classes.get(CssKey::InputGroup)
    )
}

fn plain_errors(_: &StyleConfig) -> String {
    "{errors}".to_string()
}

fn bootstrap_normal_row(style: &StyleConfig) -> String {
    let (open, close) = if style.use_form_group_div {
        (
            format!(r#"<div class="{}">"#, style.css_classes.get(CssKey::InputGroup)),
            "</div>",
        )
    } else {
        (String::new(), "")
    };
    format!(
        r"
{open}
    {{label}}
    {{field}}
    {{errors}}
    {{help_text}}
{close}
"
    )
}

fn bootstrap_checkbox_row(style: &StyleConfig) -> String {
    format!(
        r#"
<div class="{}">
    <div class="{}">
        {{field}}
        {{label}}
        {{errors}}
    </div>
    {{help_text}}
</div>
"#,
        style.css_classes.get(CssKey::InputGroup),
        style.css_classes.get(CssKey::InputGroupCheckbox)
    )
}

// `d-block` keeps the feedback visible outside a `.was-validated` form.
fn bootstrap_errors(_: &StyleConfig) -> String {
    r#"<div class="invalid-feedback d-block">{errors}</div>"#.to_string()
}

fn semantic_normal_row(_: &StyleConfig) -> String {
    r#"
<div class="field {error_class}">
    {label}
    {field}
    {help_text}
    {errors}
</div>
"#
    .to_string()
}

fn semantic_checkbox_row(style: &StyleConfig) -> String {
    format!(
        r#"
<div class="{}">
    <div class="{}">
        {{field}}
        {{label}}
    </div>
    {{help_text}}
    {{errors}}
</div>
"#,
        style.css_classes.get(CssKey::InputGroup),
        style.css_classes.get(CssKey::InputGroupCheckbox)
    )
}

fn semantic_errors(_: &StyleConfig) -> String {
    r#"
<div class="ui error message">
    <p>{errors}</p>
</div>
"#
    .to_string()
}
