pub mod repository;
pub mod schema;
mod routes;

pub use routes::get_router;
