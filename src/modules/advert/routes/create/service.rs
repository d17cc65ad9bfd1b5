use super::types::{request, response};
use crate::{
    modules::advert::{repository, schema},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let advert = schema::validate_create(&payload.body).map_err(|errors| {
        tracing::warn!("Failed to validate advert payload: {errors:?}");
        response::Error::FailedToValidate(errors)
    })?;

    let mut tx = repository::begin(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::UnexpectedError)?;

    let advert = repository::create(
        &mut *tx,
        repository::CreateAdvertPayload {
            title: advert.title,
            description: advert.description,
            owner: advert.owner,
        },
    )
    .await
    .map_err(response::Error::from)?;

    repository::commit(tx).await.map_err(response::Error::from)?;

    tracing::info!("Advert {} created", advert.id);
    Ok(response::Success::AdvertCreated(advert.id))
}
