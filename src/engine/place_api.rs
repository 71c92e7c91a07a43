use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceAPI,
    entities::Place,
    error::{unavailable_error, Error},
};

#[async_trait]
impl PlaceAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_places(&self, query: &str) -> Result<Vec<Place>, Error> {
        let lookup = self.lookup.as_ref().ok_or_else(unavailable_error)?;

        lookup.search(query).await
    }
}
