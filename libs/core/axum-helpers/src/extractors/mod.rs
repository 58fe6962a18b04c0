//! Custom extractors for Axum handlers.

pub mod validated_fields;

pub use validated_fields::{ValidatedFields, ValidatedPayload};
