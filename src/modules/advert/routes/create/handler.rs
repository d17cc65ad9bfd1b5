use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::validation::FieldError};
use axum::extract::{rejection::JsonRejection, Json, State};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<Value>, JsonRejection>,
) -> response::Response {
    let Json(body) = body.map_err(|rejection| {
        response::Error::FailedToValidate(vec![FieldError::json_invalid(rejection.body_text())])
    })?;

    service(ctx, request::Payload { body }).await
}
