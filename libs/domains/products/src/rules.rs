//! Field rules for product bodies, and conversion of checked fields into
//! [`CreateProduct`] / [`UpdateProduct`].

use axum_helpers::validation::{values, Check, FieldRule, FieldViolation, RuleSet};
use axum_helpers::{AppError, ValidatedPayload};
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::models::{CreateProduct, UpdateProduct};

pub const NAME_MESSAGE: &str = "Should be at least 2 Characters";
pub const PRICE_MESSAGE: &str = "Should be a number >= 0";
pub const DESCRIPTION_MESSAGE: &str = "Should be a text";

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new(vec![
        FieldRule::required("name", Check::TrimmedLength { min: 2 }, NAME_MESSAGE),
        FieldRule::required("price", Check::Number { min: 0.0 }, PRICE_MESSAGE),
        FieldRule::optional("description", Check::Text, DESCRIPTION_MESSAGE),
    ])
});

static EDIT_RULES: LazyLock<RuleSet> = LazyLock::new(|| create_rules().clone().into_optional());

/// Rules for `POST /products`
pub fn create_rules() -> &'static RuleSet {
    &CREATE_RULES
}

/// Rules for `PUT /products/{id}`: the create rules with every field optional
pub fn edit_rules() -> &'static RuleSet {
    &EDIT_RULES
}

fn name(fields: &Map<String, Value>) -> Option<String> {
    values::present(fields, "name")
        .and_then(values::trimmed_text)
        .map(str::to_owned)
}

fn price(fields: &Map<String, Value>) -> Option<f64> {
    values::present(fields, "price").and_then(values::number)
}

fn description(fields: &Map<String, Value>) -> Option<String> {
    values::present(fields, "description")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

impl ValidatedPayload for CreateProduct {
    fn rules() -> &'static RuleSet {
        create_rules()
    }

    fn from_fields(fields: Map<String, Value>) -> Result<Self, AppError> {
        let name = name(&fields).ok_or_else(|| {
            AppError::ValidationFailed(vec![FieldViolation::new("name", NAME_MESSAGE)])
        })?;
        let price = price(&fields).ok_or_else(|| {
            AppError::ValidationFailed(vec![FieldViolation::new("price", PRICE_MESSAGE)])
        })?;

        Ok(CreateProduct {
            name,
            price,
            description: description(&fields),
        })
    }
}

impl ValidatedPayload for UpdateProduct {
    fn rules() -> &'static RuleSet {
        edit_rules()
    }

    /// An empty `description` keeps the stored one, like an absent field.
    fn from_fields(fields: Map<String, Value>) -> Result<Self, AppError> {
        Ok(UpdateProduct {
            name: name(&fields),
            price: price(&fields),
            description: description(&fields).filter(|text| !text.is_empty()),
        })
    }
}
