//! Declarative field rules for request bodies.
//!
//! A [`RuleSet`] is an ordered list of [`FieldRule`]s evaluated against the
//! decoded body (a JSON object). Every rule is evaluated; violations are
//! reported in declaration order, one per violated rule.
//!
//! ```rust
//! use axum_helpers::validation::{Check, FieldRule, RuleSet};
//! use serde_json::json;
//!
//! let rules = RuleSet::new(vec![
//!     FieldRule::required("name", Check::TrimmedLength { min: 2 }, "Should be at least 2 Characters"),
//!     FieldRule::required("price", Check::Number { min: 0.0 }, "Should be a number >= 0"),
//! ]);
//!
//! let body = json!({ "name": " a ", "price": "-1" });
//! let violations = rules.check(body.as_object().unwrap()).unwrap_err();
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations[0].field, "name");
//!
//! // Same constraints, but absent or null fields are accepted.
//! assert!(rules.into_optional().check(&serde_json::Map::new()).is_ok());
//! ```

mod rule;
pub mod values;
mod violation;

pub use rule::{Check, FieldRule, Presence};
pub use violation::FieldViolation;

use serde_json::{Map, Value};

/// Ordered collection of field rules for one operation
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// Same rules with every field optional-when-null
    pub fn into_optional(self) -> Self {
        Self {
            rules: self
                .rules
                .into_iter()
                .map(|rule| rule.with_presence(Presence::Optional))
                .collect(),
        }
    }

    /// Evaluate every rule against `fields`.
    ///
    /// Fields without a rule are ignored.
    pub fn check(&self, fields: &Map<String, Value>) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = self
            .rules
            .iter()
            .filter(|rule| !rule.is_satisfied_by(fields.get(rule.field)))
            .map(FieldRule::violation)
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
