//! # styled-forms
//!
//! Form rendering for CSS frameworks: named styles, per-form overrides and
//! declarative grid layouts.
//!
//! This crate provides:
//! - A registry of named styles (Bootstrap and Semantic UI built in)
//! - Layered resolution of a named style and a per-form override
//! - Validity-driven CSS classes on inputs and on the form
//! - Grid layouts with Bootstrap and Semantic UI column dialects
//! - Minimal fields, widgets and validators to drive them
//!
//! ## Quick Start
//!
//! ```rust
//! use styled_forms::fields::{boolean_field, char_field, email_field};
//! use styled_forms::{FormBuilder, GridSpec, StyleOverride};
//! use std::collections::HashMap;
//!
//! let overrides = StyleOverride::new().grid(
//!     GridSpec::new()
//!         .row([("email", 6), ("name", 6)])
//!         .row([("agree", 12)]),
//! );
//! let mut form = FormBuilder::new()
//!     .field(email_field("email", "Email", true))
//!     .field(char_field("name", "Name", 100, false))
//!     .field(boolean_field("agree", "I agree"))
//!     .overrides(overrides)
//!     .bootstrap()
//!     .build()
//!     .unwrap();
//!
//! let mut data = HashMap::new();
//! data.insert("email".to_string(), "not an email".to_string());
//! form.bind(data);
//!
//! assert!(!form.is_valid());
//! let html = form.as_html().unwrap();
//! assert!(html.contains(r#"<div class="col-6">"#));
//! assert!(html.contains("is-invalid"));
//! ```
//!
//! ## Declarative overrides
//!
//! ```rust
//! use styled_forms::{FormBuilder, StyleOverride};
//! use styled_forms::fields::char_field;
//!
//! let overrides = StyleOverride::from_json_str(
//!     r#"{"style": "semanticui", "grid": [[["city", 10], ["zip", "six"]]]}"#,
//! )
//! .unwrap();
//! let mut form = FormBuilder::new()
//!     .field(char_field("city", "City", 50, true))
//!     .field(char_field("zip", "Zip", 10, true))
//!     .overrides(overrides)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(form.form_class(), "ui form");
//! let html = form.as_html().unwrap();
//! assert!(html.contains(r#"<div class="ten wide field">"#));
//! assert!(html.contains(r#"<div class="six wide field">"#));
//! ```
//!
//! ## Custom styles
//!
//! ```rust
//! use styled_forms::style::{self, CssKey, StyleRegistry};
//!
//! let mut compact = style::bootstrap();
//! compact.css_classes.set(CssKey::Input, "form-control form-control-sm");
//! StyleRegistry::global().register("compact", compact);
//!
//! assert!(StyleRegistry::global().contains("compact"));
//! ```

pub mod classify;
mod error;
pub mod field;
pub mod fields;
mod form;
pub mod grid;
pub mod style;
pub mod template;
pub mod validation;
pub mod widgets;

pub use error::{FormError, Result, ValidationErrors, NON_FIELD_ERRORS};
pub use field::{FieldDef, Validity, WidgetKind};
pub use form::{FormBuilder, FormCleanHook, RenderedForm, StyledForm, REQUIRED_MESSAGE};
pub use grid::{GridCell, GridDialect, GridSpec, Width};
pub use style::{StyleConfig, StyleDefinition, StyleOverride, StyleRegistry, StyleResolver};
