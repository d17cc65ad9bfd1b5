pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        AdvertDeleted(i32),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertDeleted(id) => (
                    StatusCode::OK,
                    Json(json!({ "status": "success", "id": id })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        AdvertNotFound,
        FailedToDeleteAdvert,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "status": "error", "description": "advert not found" })),
                )
                    .into_response(),
                Self::FailedToDeleteAdvert => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
