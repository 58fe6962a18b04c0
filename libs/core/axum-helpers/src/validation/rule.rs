use serde_json::Value;
use validator::{ValidateLength, ValidateRange};

use super::{values, FieldViolation};

/// Whether a field may be absent or `null`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// Absent or `null` passes; any other value must satisfy the check
    Optional,
}

/// Type and value constraint applied to a present field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// Text whose trimmed length is at least `min` characters
    TrimmedLength { min: u64 },
    /// Number (or numeric string) greater than or equal to `min`
    Number { min: f64 },
    /// Any text
    Text,
}

impl Check {
    fn accepts(&self, value: &Value) -> bool {
        match *self {
            Check::TrimmedLength { min } => values::trimmed_text(value)
                .is_some_and(|text| text.validate_length(Some(min), None, None)),
            Check::Number { min } => values::number(value)
                .is_some_and(|number| number.validate_range(Some(min), None, None, None)),
            Check::Text => value.is_string(),
        }
    }
}

/// One field's constraint and the message reported when it is violated
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: &'static str,
    pub presence: Presence,
    pub check: Check,
    pub message: &'static str,
}

impl FieldRule {
    pub fn required(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            presence: Presence::Required,
            check,
            message,
        }
    }

    pub fn optional(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            presence: Presence::Optional,
            check,
            message,
        }
    }

    pub fn with_presence(self, presence: Presence) -> Self {
        Self { presence, ..self }
    }

    pub(super) fn is_satisfied_by(&self, value: Option<&Value>) -> bool {
        match value {
            None | Some(Value::Null) => self.presence == Presence::Optional,
            Some(value) => self.check.accepts(value),
        }
    }

    pub(super) fn violation(&self) -> FieldViolation {
        FieldViolation::new(self.field, self.message)
    }
}
