use super::service::service;
use super::types::{request, response};
use crate::{types::Context, utils::validation::FieldError};
use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Json, Path, State,
};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> response::Response {
    let Path(id) = id.map_err(|_| response::Error::AdvertNotFound)?;
    let Json(body) = body.map_err(|rejection| {
        response::Error::FailedToValidate(vec![FieldError::json_invalid(rejection.body_text())])
    })?;

    service(ctx, request::Payload { id, body }).await
}
