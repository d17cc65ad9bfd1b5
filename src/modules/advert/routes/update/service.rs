use super::types::{request, response};
use crate::{
    modules::advert::{repository, schema},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let changes = schema::validate_update(&payload.body).map_err(|errors| {
        tracing::warn!("Failed to validate advert payload: {errors:?}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = repository::begin(&ctx.db_conn.pool)
        .await
        .map_err(response::Error::from)?;

    repository::find_by_id(&mut *tx, payload.id)
        .await
        .map_err(response::Error::from)?
        .ok_or(response::Error::AdvertNotFound)?;

    let advert = repository::update_by_id(
        &mut *tx,
        payload.id,
        repository::UpdateAdvertPayload {
            title: changes.title,
            description: changes.description,
            owner: changes.owner,
        },
    )
    .await
    .map_err(response::Error::from)?
    .ok_or(response::Error::AdvertNotFound)?;

    repository::commit(tx).await.map_err(response::Error::from)?;

    Ok(response::Success::AdvertUpdated(advert.id))
}
