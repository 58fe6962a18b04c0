//! Body extractor that runs a [`RuleSet`] before the handler.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::validation::RuleSet;

/// A payload built from rule-checked request fields.
///
/// `from_fields` only runs after every rule in [`rules`](Self::rules) passed,
/// so it can rely on the checked shape.
pub trait ValidatedPayload: Sized {
    fn rules() -> &'static RuleSet;

    fn from_fields(fields: Map<String, Value>) -> Result<Self, AppError>;
}

/// Extractor that decodes the body, checks it against `T::rules()` and
/// converts it into `T`.
///
/// Decodes `application/json` and `application/x-www-form-urlencoded` bodies.
/// An empty JSON body, or a body of any other content type, is an empty
/// object, so required fields show up as violations rather than a decoding
/// error. Violations reject with `422`, before the handler runs.
///
/// # Example
/// ```ignore
/// async fn create(ValidatedFields(input): ValidatedFields<CreateProduct>) -> ... { }
/// ```
pub struct ValidatedFields<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedFields<T>
where
    T: ValidatedPayload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = match BodyKind::of(&req) {
            BodyKind::Form => {
                let Form(form) =
                    Form::<HashMap<String, String>>::from_request(req, state).await?;
                form.into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect()
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state).await?;
                parse_json_object(&bytes)?
            }
            BodyKind::Other => Map::new(),
        };

        T::rules().check(&fields).map_err(AppError::ValidationFailed)?;

        T::from_fields(fields).map(ValidatedFields)
    }
}

/// How a body is decoded, by `Content-Type`
enum BodyKind {
    Json,
    Form,
    /// Not decoded; the rules see an empty object
    Other,
}

impl BodyKind {
    fn of(req: &Request) -> Self {
        let Some(content_type) = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        else {
            return BodyKind::Other;
        };

        let mime = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if mime == "application/x-www-form-urlencoded" {
            BodyKind::Form
        } else if mime == "application/json"
            || (mime.starts_with("application/") && mime.ends_with("+json"))
        {
            BodyKind::Json
        } else {
            BodyKind::Other
        }
    }
}

fn parse_json_object(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(map) => Ok(map),
        _ => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}
