//! Form field values returned by page form-field extraction

use crate::geometry::Rectangle;
use serde::{Deserialize, Serialize};

/// Type of form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormFieldKind {
    /// Unknown field type
    #[default]
    Unknown,
    /// Push button, checkbox or radio button
    Button,
    /// Text input
    Text,
    /// Combo box or list box
    Choice,
    /// Digital signature field
    Signature,
}

impl FormFieldKind {
    /// Check if the field takes free text.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Check if this is a choice field (combo/list).
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Choice)
    }
}

/// An interactive form field on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    /// Fully qualified field name.
    pub name: String,
    /// Field type.
    pub kind: FormFieldKind,
    /// Widget area on the page.
    pub position: Rectangle,
    /// Current value, if any.
    pub value: Option<String>,
}

impl FormField {
    pub fn new(name: impl Into<String>, kind: FormFieldKind, position: Rectangle) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            value: None,
        }
    }

    /// Set the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}
