pub mod advert;

mod router;
pub use router::get_router;
