use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// A single field-level problem found while validating a request body.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FieldError {
    pub loc: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: Option<&str>, kind: &str, msg: &str) -> Self {
        Self {
            loc: field.map(|field| vec![field.to_string()]).unwrap_or_default(),
            kind: kind.to_string(),
            msg: msg.to_string(),
        }
    }

    pub fn json_invalid(msg: String) -> Self {
        Self {
            loc: vec![],
            kind: "json_invalid".to_string(),
            msg,
        }
    }

    pub fn field(&self) -> Option<&str> {
        self.loc.first().map(String::as_str)
    }
}

/// Flattens `validator` errors into field errors. The error code becomes the
/// error type and the message falls back to the code when none is set.
pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| FieldError {
                loc: vec![field.clone()],
                kind: error.code.to_string(),
                msg: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect()
}

pub fn into_response(errors: Vec<FieldError>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": "error", "description": errors })),
    )
}
