//! Field definitions and per-render field state.

use tracing::debug;

use crate::style::ClassList;
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// The rendering category of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Checkbox,
    File,
    Plain,
    Hidden,
}

/// Where a field stands in one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Unvalidated,
    Cleaning,
    Valid,
    Invalid,
}

/// Per-field hook run after the built-in checks pass. It may rewrite the
/// cleaned value or reject it with a message.
pub type CleanHook = Box<dyn Fn(&str) -> Result<String, String> + Send + Sync>;

/// Definition of a form field.
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Help text.
    pub help_text: Option<String>,
    /// Initial value.
    pub initial: Option<String>,
    /// Validators.
    pub validators: Vec<Box<dyn Validator>>,
    /// Custom clean hook.
    pub clean: Option<CleanHook>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
    /// Whether the field is disabled.
    pub disabled: bool,
}

impl std::fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("kind", &self.kind())
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("initial", &self.initial)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

impl FieldDef {
    /// Creates a new field definition.
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        widget: impl Widget + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
            widget: Box::new(widget),
            help_text: None,
            initial: None,
            validators: Vec::new(),
            clean: None,
            attrs: WidgetAttrs::new(),
            disabled: false,
        }
    }

    /// The widget's rendering category.
    pub fn kind(&self) -> WidgetKind {
        self.widget.kind()
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = Some(value.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets the custom clean hook.
    #[must_use]
    pub fn clean_with(
        mut self,
        hook: impl Fn(&str) -> Result<String, String> + Send + Sync + 'static,
    ) -> Self {
        self.clean = Some(Box::new(hook));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Disables the field.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// The mutable rendering state of one field for one pass.
#[derive(Debug, Clone)]
pub struct FieldRenderState {
    /// Field name.
    pub name: String,
    /// Widget kind of the field.
    pub kind: WidgetKind,
    /// Input classes. Tokens are only ever appended.
    pub classes: ClassList,
    validity: Validity,
}

impl FieldRenderState {
    /// Starts a pass with the classes already on the widget plus `base`.
    pub fn new(field: &FieldDef, base: &str) -> Self {
        let mut classes = field
            .attrs
            .get("class")
            .map_or_else(ClassList::new, |c| ClassList::from(c.as_str()));
        classes.push(base);
        Self {
            name: field.name.clone(),
            kind: field.kind(),
            classes,
            validity: Validity::Unvalidated,
        }
    }

    /// Where the field stands in the current pass.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// `Unvalidated -> Cleaning`. Returns false if cleaning already began.
    pub fn begin_cleaning(&mut self) -> bool {
        if self.validity != Validity::Unvalidated {
            return false;
        }
        self.validity = Validity::Cleaning;
        true
    }

    /// `Cleaning -> Valid | Invalid`, appending `token` to the classes.
    ///
    /// Returns false and changes nothing if the field is not cleaning.
    pub fn finish(&mut self, outcome: Validity, token: &str) -> bool {
        if self.validity != Validity::Cleaning
            || !matches!(outcome, Validity::Valid | Validity::Invalid)
        {
            return false;
        }
        self.validity = outcome;
        self.classes.push(token);
        debug!(field = %self.name, validity = ?outcome, "Field cleaned");
        true
    }
}
