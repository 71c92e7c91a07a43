use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::RoutePoint;

/// A finished route handed to persistence, with the deep links built at save time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRoute {
    pub id: Uuid,
    pub name: String,
    pub points: Vec<RoutePoint>,
    pub naver_uri: Option<String>,
    pub tmap_uri: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedRoute {
    pub fn new(
        name: String,
        user_id: String,
        points: Vec<RoutePoint>,
        naver_uri: Option<String>,
        tmap_uri: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            name,
            points,
            naver_uri,
            tmap_uri,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}
