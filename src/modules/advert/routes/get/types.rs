pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::advert::repository::Advert;

    pub enum Success {
        Advert(Advert),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Advert(advert) => (StatusCode::OK, Json(json!(advert))).into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        AdvertNotFound,
        FailedToFetchAdvert,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "status": "error", "description": "advert not found" })),
                )
                    .into_response(),
                Self::FailedToFetchAdvert => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
