//! Picking CSS classes for a field from its widget kind and validity.

use crate::field::{Validity, WidgetKind};
use crate::style::{CssClasses, CssKey};

/// Maps widget kinds and validation outcomes to class tokens of one
/// style's class table.
#[derive(Debug, Clone, Copy)]
pub struct FieldClassifier<'a> {
    classes: &'a CssClasses,
}

impl<'a> FieldClassifier<'a> {
    /// Creates a classifier over one style's class table.
    pub fn new(classes: &'a CssClasses) -> Self {
        Self { classes }
    }

    /// The class every input of `kind` starts with.
    pub fn base(&self, kind: WidgetKind) -> &'a str {
        match kind {
            WidgetKind::Checkbox => self.classes.get(CssKey::InputCheckbox),
            WidgetKind::File => self.classes.get(CssKey::InputFile),
            WidgetKind::Plain => self.classes.get(CssKey::Input),
            WidgetKind::Hidden => "",
        }
    }

    /// The token appended once a field of `kind` reaches `validity`.
    ///
    /// Hidden inputs and fields that have not finished cleaning get none.
    pub fn classify(&self, kind: WidgetKind, validity: Validity) -> &'a str {
        match (kind, validity) {
            (WidgetKind::Hidden, _) => "",
            (_, Validity::Valid) => self.classes.get(CssKey::ValidInput),
            (_, Validity::Invalid) => self.classes.get(CssKey::InvalidInput),
            (_, Validity::Unvalidated | Validity::Cleaning) => "",
        }
    }

    /// The label class for a field of `kind`.
    pub fn label(&self, kind: WidgetKind) -> &'a str {
        match kind {
            WidgetKind::Checkbox => self.classes.get(CssKey::LabelCheckbox),
            _ => self.classes.get(CssKey::Label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_bootstrap_tokens() {
        let classes = style::bootstrap().css_classes;
        let classifier = FieldClassifier::new(&classes);
        for kind in [WidgetKind::Plain, WidgetKind::Checkbox, WidgetKind::File] {
            assert_eq!(classifier.classify(kind, Validity::Valid), "is-valid");
            assert_eq!(classifier.classify(kind, Validity::Invalid), "is-invalid");
        }
        assert_eq!(classifier.base(WidgetKind::Checkbox), "form-check-input");
        assert_eq!(classifier.base(WidgetKind::File), "form-control-file");
        assert_eq!(classifier.base(WidgetKind::Plain), "form-control");
    }

    #[test]
    fn test_semantic_ui_tokens() {
        let classes = style::semantic_ui().css_classes;
        let classifier = FieldClassifier::new(&classes);
        assert_eq!(classifier.classify(WidgetKind::Plain, Validity::Valid), "");
        assert_eq!(classifier.classify(WidgetKind::Plain, Validity::Invalid), "error");
    }

    #[test]
    fn test_hidden_and_pending_get_nothing() {
        let classes = style::bootstrap().css_classes;
        let classifier = FieldClassifier::new(&classes);
        assert_eq!(classifier.classify(WidgetKind::Hidden, Validity::Invalid), "");
        assert_eq!(classifier.classify(WidgetKind::Plain, Validity::Unvalidated), "");
        assert_eq!(classifier.base(WidgetKind::Hidden), "");
    }

    #[test]
    fn test_label_classes() {
        let classes = style::bootstrap().css_classes;
        let classifier = FieldClassifier::new(&classes);
        assert_eq!(classifier.label(WidgetKind::Checkbox), "form-check-label");
        assert_eq!(classifier.label(WidgetKind::Plain), "");
    }
}
