pub mod request {
    use serde_json::Value;

    pub struct Payload {
        pub id: i32,
        pub body: Value,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        modules::advert::repository,
        utils::validation::{self, FieldError},
    };

    pub enum Success {
        AdvertUpdated(i32),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdvertUpdated(id) => (
                    StatusCode::OK,
                    Json(json!({ "status": "success", "id": id })),
                )
                    .into_response(),
            }
        }
    }

    #[derive(Debug)]
    pub enum Error {
        FailedToValidate(Vec<FieldError>),
        AdvertNotFound,
        AdvertAlreadyExists,
        FailedToUpdateAdvert,
    }

    impl From<repository::Error> for Error {
        fn from(err: repository::Error) -> Self {
            match err {
                repository::Error::UniqueViolation => Self::AdvertAlreadyExists,
                repository::Error::UnexpectedError => Self::FailedToUpdateAdvert,
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => validation::into_response(errors).into_response(),
                Self::AdvertNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "status": "error", "description": "advert not found" })),
                )
                    .into_response(),
                Self::AdvertAlreadyExists => (
                    StatusCode::CONFLICT,
                    Json(json!({ "status": "error", "description": "advert already exists" })),
                )
                    .into_response(),
                Self::FailedToUpdateAdvert => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
