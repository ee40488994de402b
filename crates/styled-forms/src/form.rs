//! Styled forms: validation, per-field classes and final markup.

use std::collections::HashMap;
use std::fmt;

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, Small};

use crate::classify::FieldClassifier;
use crate::error::{Result, ValidationErrors, NON_FIELD_ERRORS};
use crate::field::{FieldDef, FieldRenderState, Validity, WidgetKind};
use crate::grid::GridBody;
use crate::style::{
    ClassList, CssKey, StyleConfig, StyleDefinition, StyleOverride, StyleRegistry, StyleResolver,
};
use crate::template::{fill, fill_errors, RowContext};
use crate::widgets::{html_escape, CheckboxInput};

/// Message recorded when a required field is left empty.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Form-wide hook run after every field has been cleaned. It receives the
/// cleaned values of the valid fields.
pub type FormCleanHook =
    Box<dyn Fn(&HashMap<String, String>) -> std::result::Result<(), ValidationErrors> + Send + Sync>;

/// Collects fields and style settings, then resolves them into a
/// [`StyledForm`].
#[derive(Default)]
pub struct FormBuilder {
    fields: Vec<FieldDef>,
    style: Option<String>,
    forced_style: Option<&'static str>,
    overrides: StyleOverride,
    clean: Option<FormCleanHook>,
}

impl fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormBuilder")
            .field("fields", &self.fields)
            .field("style", &self.style)
            .field("forced_style", &self.forced_style)
            .field("overrides", &self.overrides)
            .finish_non_exhaustive()
    }
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds several fields to the form.
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Names the base style. A style named by the override takes precedence.
    #[must_use]
    pub fn style(mut self, name: impl Into<String>) -> Self {
        self.style = Some(name.into());
        self
    }

    /// Sets the per-form style override.
    #[must_use]
    pub fn overrides(mut self, overrides: StyleOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// Forces the Bootstrap style over any style the override names.
    #[must_use]
    pub fn bootstrap(mut self) -> Self {
        self.forced_style = Some("bootstrap");
        self
    }

    /// Forces the Semantic UI style over any style the override names.
    #[must_use]
    pub fn semantic_ui(mut self) -> Self {
        self.forced_style = Some("semanticui");
        self
    }

    fn into_parts(self) -> (Vec<FieldDef>, Option<String>, StyleOverride, Option<FormCleanHook>) {
        let overrides = match self.forced_style {
            Some(name) => self.overrides.with_style(name),
            None => self.overrides,
        };
        (self.fields, self.style, overrides, self.clean)
    }

    /// Sets the form-wide clean hook.
    #[must_use]
    pub fn clean(
        mut self,
        hook: impl Fn(&HashMap<String, String>) -> std::result::Result<(), ValidationErrors>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.clean = Some(Box::new(hook));
        self
    }

    /// Resolves the style against the global registry.
    pub fn build(self) -> Result<StyledForm> {
        self.build_in(StyleRegistry::global())
    }

    /// Resolves the style against `registry`.
    pub fn build_in(self, registry: &StyleRegistry) -> Result<StyledForm> {
        let (fields, style, overrides, clean) = self.into_parts();
        let config = StyleResolver::new(registry).resolve(style.as_deref(), &overrides)?;
        Ok(StyledForm::new(fields, config, clean))
    }

    /// Merges the override over an unregistered style definition.
    pub fn build_with(self, definition: &StyleDefinition) -> Result<StyledForm> {
        let (fields, _, overrides, clean) = self.into_parts();
        let config = StyleResolver::resolve_with(definition, &overrides)?;
        Ok(StyledForm::new(fields, config, clean))
    }
}

/// The output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedForm {
    /// Visible field fragments in declaration order.
    pub fields: Vec<(String, String)>,
    /// Concatenated hidden inputs.
    pub hidden_fields: String,
    /// Non-field and hidden-field errors, empty when there are none.
    pub top_errors: String,
    /// Class string for the `<form>` element.
    pub form_class: String,
    /// Top errors followed by the laid-out fields.
    pub html: String,
}

impl RenderedForm {
    /// Returns the fragment rendered for `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, html)| html.as_str())
    }
}

impl fmt::Display for RenderedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

/// A form bound to a resolved style.
pub struct StyledForm {
    fields: Vec<FieldDef>,
    config: StyleConfig,
    clean: Option<FormCleanHook>,
    states: Vec<FieldRenderState>,
    form_classes: ClassList,
    data: Option<HashMap<String, String>>,
    errors: ValidationErrors,
    cleaned_data: HashMap<String, String>,
    cleaned: bool,
}

impl fmt::Debug for StyledForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyledForm")
            .field("fields", &self.fields)
            .field("config", &self.config)
            .field("states", &self.states)
            .field("form_classes", &self.form_classes)
            .field("bound", &self.data.is_some())
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl StyledForm {
    /// Creates a form from fields and an already resolved style.
    pub fn new(fields: Vec<FieldDef>, config: StyleConfig, clean: Option<FormCleanHook>) -> Self {
        let mut form = Self {
            fields,
            config,
            clean,
            states: Vec::new(),
            form_classes: ClassList::new(),
            data: None,
            errors: ValidationErrors::new(),
            cleaned_data: HashMap::new(),
            cleaned: false,
        };
        form.reset();
        form
    }

    fn reset(&mut self) {
        let classifier = FieldClassifier::new(&self.config.css_classes);
        self.states = self
            .fields
            .iter()
            .map(|field| FieldRenderState::new(field, classifier.base(field.kind())))
            .collect();
        self.form_classes = ClassList::from(self.config.form_class());
        self.errors = ValidationErrors::new();
        self.cleaned_data.clear();
        self.cleaned = false;
    }

    /// Binds submitted data, starting a new validation cycle.
    pub fn bind(&mut self, data: HashMap<String, String>) {
        self.reset();
        self.data = Some(data);
    }

    /// Whether the form has data to validate.
    pub fn is_bound(&self) -> bool {
        self.data.is_some()
    }

    /// The resolved style.
    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// The field definitions in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// The render state of one field.
    pub fn field_state(&self, name: &str) -> Option<&FieldRenderState> {
        self.states.iter().find(|s| s.name == name)
    }

    /// Validation errors, cleaning the form first if needed.
    pub fn errors(&mut self) -> &ValidationErrors {
        self.full_clean();
        &self.errors
    }

    /// Values of the fields that passed cleaning.
    pub fn cleaned_data(&mut self) -> &HashMap<String, String> {
        self.full_clean();
        &self.cleaned_data
    }

    /// The aggregate class string for the `<form>` element.
    pub fn form_class(&self) -> String {
        self.form_classes.to_string()
    }

    /// Cleans every field once per bind. Does nothing for unbound forms.
    ///
    /// Bad input never fails here: each field ends `Valid` or `Invalid`
    /// and its messages are recorded.
    pub fn full_clean(&mut self) {
        if self.cleaned {
            return;
        }
        let Some(data) = self.data.as_ref() else {
            return;
        };
        let classifier = FieldClassifier::new(&self.config.css_classes);

        for (field, state) in self.fields.iter().zip(self.states.iter_mut()) {
            if !state.begin_cleaning() {
                continue;
            }
            let raw = if field.disabled {
                field.initial.as_deref().unwrap_or_default()
            } else {
                data.get(&field.name).map_or("", String::as_str)
            };
            match clean_field(field, raw) {
                Ok(value) => {
                    state.finish(Validity::Valid, classifier.classify(state.kind, Validity::Valid));
                    self.cleaned_data.insert(field.name.clone(), value);
                }
                Err(messages) => {
                    state.finish(
                        Validity::Invalid,
                        classifier.classify(state.kind, Validity::Invalid),
                    );
                    for message in messages {
                        self.errors.add(&field.name, message);
                    }
                }
            }
        }

        if let Some(hook) = &self.clean {
            if let Err(form_errors) = hook(&self.cleaned_data) {
                for (key, messages) in form_errors.errors {
                    let known = key != NON_FIELD_ERRORS && self.fields.iter().any(|f| f.name == key);
                    if known {
                        self.cleaned_data.remove(&key);
                        self.errors.errors.entry(key).or_default().extend(messages);
                    } else {
                        self.errors
                            .errors
                            .entry(NON_FIELD_ERRORS.to_string())
                            .or_default()
                            .extend(messages);
                    }
                }
            }
        }
        self.cleaned = true;
    }

    /// Returns whether the form is bound and error free.
    ///
    /// Each call appends the validated token and one of the valid/invalid
    /// form tokens to [`form_class`](Self::form_class), so call it at most
    /// once per render.
    pub fn is_valid(&mut self) -> bool {
        self.full_clean();
        let classes = &self.config.css_classes;
        self.form_classes.push(classes.get(CssKey::ValidatedForm));
        let valid = self.is_bound() && self.errors.is_empty();
        self.form_classes.push(classes.get(if valid {
            CssKey::ValidForm
        } else {
            CssKey::InvalidForm
        }));
        valid
    }

    /// Renders every field through the style's row templates and grid.
    ///
    /// Only configuration mistakes fail: an out-of-range grid width or a
    /// grid cell naming a field that is not rendered in the body.
    pub fn render(&mut self) -> Result<RenderedForm> {
        self.full_clean();

        let classifier = FieldClassifier::new(&self.config.css_classes);
        let separate = self.config.separate_errors();
        let error_row = self.config.error_row();
        let mut top_errors: Vec<String> = self.errors.non_field().to_vec();
        let mut hidden = Vec::new();
        let mut body = GridBody::default();

        for (field, state) in self.fields.iter().zip(&self.states) {
            let messages = self.errors.get(&field.name).map_or(&[][..], Vec::as_slice);
            let input = self.render_input(field, state);

            if state.kind == WidgetKind::Hidden {
                top_errors.extend(
                    messages
                        .iter()
                        .map(|m| format!("(Hidden field {}) {m}", field.name)),
                );
                hidden.push(input);
                continue;
            }

            let error_fragment = if messages.is_empty() {
                String::new()
            } else {
                fill_errors(&error_row, &error_text(messages))
            };
            let error_class = if messages.is_empty() {
                ""
            } else {
                self.config.css_classes.get(CssKey::InvalidInput)
            };
            let template = match state.kind {
                WidgetKind::Checkbox => self.config.checkbox_row(),
                WidgetKind::File => self.config.file_row(),
                WidgetKind::Plain | WidgetKind::Hidden => self.config.normal_row(),
            };
            let label = render_label(field, &classifier);
            let help_text = field.help_text.as_deref().map_or_else(String::new, |help| {
                let small = Element::<Small>::new().class("form-text text-muted").text(help);
                format!(" {}", small.render())
            });

            let row = fill(
                &template,
                &RowContext {
                    label: &label,
                    field: &input,
                    errors: if separate { "" } else { &error_fragment },
                    help_text: &help_text,
                    error_class,
                },
            );
            if separate && !error_fragment.is_empty() {
                body.errors.insert(field.name.clone(), error_fragment);
            }
            body.fields.push((field.name.clone(), row));
        }
        body.hidden = hidden.concat();

        let top = if top_errors.is_empty() {
            String::new()
        } else {
            fill_errors(&error_row, &error_text(&top_errors))
        };
        let laid_out = self.config.grid.render(&body)?;
        let html = if top.is_empty() {
            laid_out
        } else {
            format!("{top}\n{laid_out}")
        };

        let GridBody { fields, hidden, .. } = body;
        Ok(RenderedForm {
            fields,
            hidden_fields: hidden,
            top_errors: top,
            form_class: self.form_class(),
            html,
        })
    }

    /// Renders the form body as one HTML string.
    pub fn as_html(&mut self) -> Result<String> {
        Ok(self.render()?.html)
    }

    /// Renders the body wrapped in a `<form>` carrying the form classes.
    pub fn as_form(&mut self, action: &str, method: &str) -> Result<String> {
        let rendered = self.render()?;
        let class = rendered.form_class.as_str();
        Ok(html! { form.action(#action).method(#method) }
            .when(!class.is_empty(), |f| f.class(class))
            .child::<Div, _>(|d| d.raw(&rendered.html))
            .render())
    }

    fn render_input(&self, field: &FieldDef, state: &FieldRenderState) -> String {
        let mut attrs = field.attrs.clone();
        attrs.set("id", format!("id_{}", field.name));
        if state.classes.is_empty() {
            attrs.attrs.remove("class");
        } else {
            attrs.set("class", state.classes.to_string());
        }
        if field.required {
            attrs.set("required", "required");
        }
        if field.disabled {
            attrs.set("disabled", "disabled");
        }

        let value = match &self.data {
            Some(data) if !field.disabled => data.get(&field.name).map(String::as_str),
            _ => field.initial.as_deref(),
        };
        field.widget.render(&field.name, value, &attrs)
    }
}

/// Runs the built-in checks, the validators and the custom hook for one
/// field, returning the cleaned value or every message produced.
fn clean_field(field: &FieldDef, raw: &str) -> std::result::Result<String, Vec<String>> {
    let (value, empty) = match field.kind() {
        WidgetKind::Checkbox => {
            let checked = CheckboxInput::is_checked(raw.trim());
            (checked.to_string(), !checked)
        }
        WidgetKind::File => (raw.to_string(), raw.is_empty()),
        WidgetKind::Plain | WidgetKind::Hidden => {
            let trimmed = raw.trim();
            (trimmed.to_string(), trimmed.is_empty())
        }
    };

    if empty && field.required {
        return Err(vec![REQUIRED_MESSAGE.to_string()]);
    }
    if !empty {
        let messages: Vec<String> = field
            .validators
            .iter()
            .filter_map(|v| v.validate(&value).err())
            .collect();
        if !messages.is_empty() {
            return Err(messages);
        }
    }
    match &field.clean {
        Some(hook) => hook(&value).map_err(|message| vec![message]),
        None => Ok(value),
    }
}

fn render_label(field: &FieldDef, classifier: &FieldClassifier<'_>) -> String {
    if field.label.is_empty() {
        return String::new();
    }
    let kind = field.kind();
    let suffix = if kind == WidgetKind::Checkbox { "" } else { ":" };
    let text = format!("{}{suffix}", field.label);
    let id = format!("id_{}", field.name);
    let class = classifier.label(kind);

    html! { label.for_(#id) { #text } }
        .when(!class.is_empty(), |l| l.class(class))
        .render()
}

fn error_text(messages: &[String]) -> String {
    messages
        .iter()
        .map(|m| html_escape(m))
        .collect::<Vec<_>>()
        .join("<br>")
}
