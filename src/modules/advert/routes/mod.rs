mod create;
mod delete;
mod get;
mod update;

use crate::types::Context;
use axum::routing::{self, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/advert/", routing::post(create::handler)).route(
        "/advert/:id",
        routing::get(get::handler)
            .patch(update::handler)
            .delete(delete::handler),
    )
}
