mod navigation_api;
mod place_api;
mod saved_route_api;
mod session_api;

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    api::API,
    db::RouteStore,
    entities::Session,
    error::{not_found_error, Error},
    external::PlaceLookup,
    navigation::NavigationUriBuilder,
    sequencer::RouteSequencer,
};

pub const DEFAULT_SESSION_TTL_SECS: i64 = 60 * 60;

struct PlanningSession {
    sequencer: RouteSequencer,
    touched_at: DateTime<Utc>,
}

impl PlanningSession {
    fn new() -> Self {
        Self {
            sequencer: RouteSequencer::new(),
            touched_at: Utc::now(),
        }
    }
}

pub struct Engine {
    // one sequencer per planning session; the mutex serialises writers
    sessions: Mutex<HashMap<Uuid, PlanningSession>>,
    session_ttl: Duration,
    store: Box<dyn RouteStore>,
    lookup: Option<Box<dyn PlaceLookup>>,
    navigation: NavigationUriBuilder,
}

impl Engine {
    pub fn new<S: RouteStore + 'static>(store: S, navigation: NavigationUriBuilder) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            session_ttl: Duration::seconds(DEFAULT_SESSION_TTL_SECS),
            store: Box::new(store),
            lookup: None,
            navigation,
        }
    }

    pub fn with_lookup<L: PlaceLookup + 'static>(mut self, lookup: L) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    /// Sessions untouched for longer than `ttl` are dropped.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    /// Runs `f` against the session's sequencer while holding the session lock.
    async fn with_session<T, F>(&self, id: Uuid, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut RouteSequencer) -> Result<T, Error>,
    {
        let mut sessions = self.sessions.lock().await;
        let now = Utc::now();
        self.evict_idle(&mut sessions, now);

        let session = sessions.get_mut(&id).ok_or_else(not_found_error)?;
        session.touched_at = now;

        f(&mut session.sequencer)
    }

    fn evict_idle(&self, sessions: &mut HashMap<Uuid, PlanningSession>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, session| now - session.touched_at <= self.session_ttl);

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "idle planning sessions dropped");
        }
    }
}

fn snapshot(id: Uuid, sequencer: &RouteSequencer) -> Session {
    Session {
        id,
        points: sequencer.current().to_vec(),
    }
}

impl API for Engine {}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::db::MemoryRouteStore;
    use crate::entities::Place;

    pub fn engine() -> Engine {
        Engine::new(MemoryRouteStore::new(), NavigationUriBuilder::default())
    }

    pub fn located(id: &str, mapx: &str, mapy: &str) -> Place {
        Place::new(id, format!("Place {}", id)).with_coordinates(mapx, mapy)
    }
}
