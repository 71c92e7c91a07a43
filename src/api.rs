use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Place, RoutePoint, SavedRoute, Session};
use crate::error::Error;
use crate::navigation::Vendor;

/// Planning sessions: one route sequence per session, mutated until saved or discarded.
#[async_trait]
pub trait SessionAPI {
    async fn create_session(&self) -> Result<Session, Error>;
    async fn find_session(&self, id: Uuid) -> Result<Session, Error>;
    async fn discard_session(&self, id: Uuid) -> Result<(), Error>;
    async fn add_place(&self, id: Uuid, place: Place) -> Result<Session, Error>;
    async fn remove_place(&self, id: Uuid, place_id: &str) -> Result<Session, Error>;
    async fn reorder_places(&self, id: Uuid, place_ids: Vec<String>) -> Result<Session, Error>;
    async fn find_similar_place(&self, id: Uuid, place: Place)
        -> Result<Option<RoutePoint>, Error>;
}

#[async_trait]
pub trait NavigationAPI {
    async fn build_navigation_uri(&self, session_id: Uuid, vendor: Vendor) -> Result<String, Error>;
    /// Builds a URI for an ad-hoc ordered list of places without touching any session.
    async fn build_uri(&self, vendor: Vendor, places: Vec<Place>) -> Result<String, Error>;
}

#[async_trait]
pub trait SavedRouteAPI {
    async fn save_route(&self, session_id: Uuid, name: String, user_id: String)
        -> Result<SavedRoute, Error>;
    async fn find_saved_route(&self, id: Uuid) -> Result<SavedRoute, Error>;
    async fn list_saved_routes(&self, user_id: &str) -> Result<Vec<SavedRoute>, Error>;
    async fn delete_saved_route(&self, id: Uuid) -> Result<bool, Error>;
}

#[async_trait]
pub trait PlaceAPI {
    async fn search_places(&self, query: &str) -> Result<Vec<Place>, Error>;
}

pub trait API: SessionAPI + NavigationAPI + SavedRouteAPI + PlaceAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
