use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::RoutePoint;

/// Snapshot of a planning session's route.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub points: Vec<RoutePoint>,
}
