use super::Engine;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::NavigationAPI,
    entities::Place,
    error::Error,
    navigation::Vendor,
    sequencer::RouteSequencer,
};

#[async_trait]
impl NavigationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn build_navigation_uri(&self, session_id: Uuid, vendor: Vendor) -> Result<String, Error> {
        self.with_session(session_id, |sequencer| {
            self.navigation
                .build(vendor, sequencer.current())
                .map_err(|err| {
                    tracing::debug!(%err, "navigation uri rejected");
                    Error::from(err)
                })
        })
        .await
    }

    #[tracing::instrument(skip(self, places), fields(count = places.len()))]
    async fn build_uri(&self, vendor: Vendor, places: Vec<Place>) -> Result<String, Error> {
        let sequencer = RouteSequencer::from_places(places)?;

        Ok(self.navigation.build(vendor, sequencer.current())?)
    }
}
