use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::SavedRouteAPI,
    entities::{RoutePoint, SavedRoute},
    error::{invalid_input_error, not_found_error, Error},
    navigation::Vendor,
};

impl Engine {
    /// A failed build is recorded as "no link" rather than failing the save.
    fn try_build(&self, vendor: Vendor, points: &[RoutePoint]) -> Option<String> {
        match self.navigation.build(vendor, points) {
            Ok(uri) => Some(uri),
            Err(err) => {
                tracing::debug!(%vendor, %err, "saving route without navigation uri");
                None
            }
        }
    }
}

#[async_trait]
impl SavedRouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn save_route(
        &self,
        session_id: Uuid,
        name: String,
        user_id: String,
    ) -> Result<SavedRoute, Error> {
        let name = name.trim().to_string();
        if name.is_empty() || user_id.trim().is_empty() {
            return Err(invalid_input_error());
        }

        let points = self
            .with_session(session_id, |sequencer| Ok(sequencer.current().to_vec()))
            .await?;
        if points.is_empty() {
            return Err(invalid_input_error());
        }

        let naver_uri = self.try_build(Vendor::Naver, &points);
        let tmap_uri = self.try_build(Vendor::Tmap, &points);
        let route = SavedRoute::new(name, user_id, points, naver_uri, tmap_uri);

        self.store.insert(&route).await?;
        tracing::info!(id = %route.id, "route saved");

        Ok(route)
    }

    #[tracing::instrument(skip(self))]
    async fn find_saved_route(&self, id: Uuid) -> Result<SavedRoute, Error> {
        self.store.find(id).await?.ok_or_else(not_found_error)
    }

    #[tracing::instrument(skip(self))]
    async fn list_saved_routes(&self, user_id: &str) -> Result<Vec<SavedRoute>, Error> {
        self.store.list_by_user(user_id).await
    }

    #[tracing::instrument(skip(self))]
    async fn delete_saved_route(&self, id: Uuid) -> Result<bool, Error> {
        self.store.delete(id).await
    }
}
