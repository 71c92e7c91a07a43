pub mod navigation;
pub mod places;
pub mod routes;
pub mod sessions;
