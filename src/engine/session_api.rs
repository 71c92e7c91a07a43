use super::{snapshot, Engine, PlanningSession};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::{
    api::SessionAPI,
    entities::{Place, RoutePoint, Session},
    error::{not_found_error, Error},
};

#[async_trait]
impl SessionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn create_session(&self) -> Result<Session, Error> {
        let id = Uuid::new_v4();
        let planning = PlanningSession::new();
        let session = snapshot(id, &planning.sequencer);

        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, Utc::now());
        sessions.insert(id, planning);
        tracing::debug!(%id, "planning session created");

        Ok(session)
    }

    #[tracing::instrument(skip(self))]
    async fn find_session(&self, id: Uuid) -> Result<Session, Error> {
        self.with_session(id, |sequencer| Ok(snapshot(id, sequencer)))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn discard_session(&self, id: Uuid) -> Result<(), Error> {
        let mut sessions = self.sessions.lock().await;
        self.evict_idle(&mut sessions, Utc::now());

        sessions.remove(&id).map(|_| ()).ok_or_else(not_found_error)
    }

    #[tracing::instrument(skip(self, place), fields(place_id = %place.id))]
    async fn add_place(&self, id: Uuid, place: Place) -> Result<Session, Error> {
        self.with_session(id, |sequencer| {
            sequencer.add(place).map_err(|err| {
                tracing::debug!(%err, "add rejected");
                err
            })?;

            Ok(snapshot(id, sequencer))
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn remove_place(&self, id: Uuid, place_id: &str) -> Result<Session, Error> {
        self.with_session(id, |sequencer| {
            sequencer.remove(place_id);
            Ok(snapshot(id, sequencer))
        })
        .await
    }

    #[tracing::instrument(skip(self))]
    async fn reorder_places(&self, id: Uuid, place_ids: Vec<String>) -> Result<Session, Error> {
        self.with_session(id, |sequencer| {
            sequencer.reorder(place_ids.as_slice()).map_err(|err| {
                tracing::debug!(%err, "reorder rejected");
                err
            })?;

            Ok(snapshot(id, sequencer))
        })
        .await
    }

    #[tracing::instrument(skip(self, place), fields(place_id = %place.id))]
    async fn find_similar_place(
        &self,
        id: Uuid,
        place: Place,
    ) -> Result<Option<RoutePoint>, Error> {
        self.with_session(id, |sequencer| Ok(sequencer.find_similar(&place).cloned()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::SessionAPI;
    use crate::engine::test_support::*;
    use crate::entities::{Place, Role};
    use chrono::{Duration, Utc};
    use tokio_test::block_on;
    use uuid::Uuid;

    #[test]
    fn session_lifecycle() {
        let engine = engine();
        let session = block_on(engine.create_session()).unwrap();
        assert!(session.points.is_empty());

        block_on(engine.add_place(session.id, located("a", "1270000000", "370000000"))).unwrap();
        block_on(engine.add_place(session.id, located("b", "1271000000", "371000000"))).unwrap();
        let updated =
            block_on(engine.add_place(session.id, located("c", "1272000000", "372000000")))
                .unwrap();
        let roles: Vec<Role> = updated.points.iter().map(|p| p.role).collect();
        assert_eq!(roles, vec![Role::Start, Role::Waypoint, Role::End]);

        let reordered = block_on(engine.reorder_places(
            session.id,
            vec!["c".into(), "b".into(), "a".into()],
        ))
        .unwrap();
        assert_eq!(reordered.points[0].id(), "c");

        let removed = block_on(engine.remove_place(session.id, "a")).unwrap();
        assert_eq!(removed.points.len(), 2);
        assert_eq!(removed.points[1].role, Role::End);

        block_on(engine.discard_session(session.id)).unwrap();
        assert_eq!(block_on(engine.find_session(session.id)).unwrap_err().code, 404);
    }

    #[test]
    fn rejected_mutations_leave_session_unchanged() {
        let engine = engine();
        let id = block_on(engine.create_session()).unwrap().id;
        block_on(engine.add_place(id, Place::new("a", "Alpha"))).unwrap();
        block_on(engine.add_place(id, Place::new("b", "Bravo"))).unwrap();

        let duplicate = block_on(engine.add_place(id, Place::new("a", "Again"))).unwrap_err();
        assert_eq!(duplicate.code, 102);

        let reorder = block_on(engine.reorder_places(id, vec!["a".into()])).unwrap_err();
        assert_eq!(reorder.code, 103);

        let session = block_on(engine.find_session(id)).unwrap();
        let ids: Vec<&str> = session.points.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn idle_sessions_expire() {
        let engine = engine().with_session_ttl(Duration::minutes(30));
        let idle = block_on(engine.create_session()).unwrap().id;
        let active = block_on(engine.create_session()).unwrap().id;

        block_on(engine.sessions.lock())
            .get_mut(&idle)
            .unwrap()
            .touched_at = Utc::now() - Duration::hours(1);

        assert_eq!(block_on(engine.find_session(idle)).unwrap_err().code, 404);
        assert!(block_on(engine.find_session(active)).is_ok());
        assert!(!block_on(engine.sessions.lock()).contains_key(&idle));
    }

    #[test]
    fn access_keeps_a_session_alive() {
        let engine = engine().with_session_ttl(Duration::minutes(30));
        let id = block_on(engine.create_session()).unwrap().id;

        block_on(engine.sessions.lock())
            .get_mut(&id)
            .unwrap()
            .touched_at = Utc::now() - Duration::minutes(20);
        block_on(engine.add_place(id, Place::new("a", "Alpha"))).unwrap();

        let touched_at = block_on(engine.sessions.lock()).get(&id).unwrap().touched_at;
        assert!(Utc::now() - touched_at < Duration::minutes(1));
    }

    #[test]
    fn unknown_session_is_not_found() {
        let engine = engine();
        let err = block_on(engine.add_place(Uuid::new_v4(), Place::new("a", "Alpha"))).unwrap_err();
        assert_eq!(err.code, 404);
    }

    #[test]
    fn similarity_query_does_not_mutate() {
        let engine = engine();
        let id = block_on(engine.create_session()).unwrap().id;
        block_on(engine.add_place(id, located("a", "1270000000", "370000000"))).unwrap();

        let similar = block_on(engine.find_similar_place(
            id,
            Place::new("custom-1", "Other").with_coordinates("1270000000", "370000000"),
        ))
        .unwrap();
        assert_eq!(similar.map(|p| p.place.id), Some("a".to_string()));
        assert_eq!(block_on(engine.find_session(id)).unwrap().points.len(), 1);
    }
}
