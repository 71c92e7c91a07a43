pub mod local_search;

use async_trait::async_trait;

use crate::entities::Place;
use crate::error::Error;

pub use local_search::LocalSearchClient;

/// Free-text place search returning geocoded candidates.
///
/// Candidates without a provider id get a fresh `custom-` id on every search, so the same place
/// found twice carries two different ids. Check results against
/// [`RouteSequencer::find_similar`](crate::sequencer::RouteSequencer::find_similar) before adding
/// them to a route.
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<Place>, Error>;
}
