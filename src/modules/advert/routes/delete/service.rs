use super::types::{request, response};
use crate::{modules::advert::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut tx = repository::begin(&ctx.db_conn.pool)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdvert)?;

    let advert = repository::find_by_id(&mut *tx, payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdvert)?
        .ok_or(response::Error::AdvertNotFound)?;

    repository::delete_by_id(&mut *tx, advert.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdvert)?
        .ok_or(response::Error::AdvertNotFound)?;

    repository::commit(tx)
        .await
        .map_err(|_| response::Error::FailedToDeleteAdvert)
        .map(|_| response::Success::AdvertDeleted(payload.id))
}
