use std::collections::HashMap;

use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entities::SavedRoute;
use crate::error::Error;

/// Persistence for finished routes. Planning sessions never touch it.
#[async_trait]
pub trait RouteStore: Send + Sync {
    async fn insert(&self, route: &SavedRoute) -> Result<(), Error>;
    async fn find(&self, id: Uuid) -> Result<Option<SavedRoute>, Error>;
    /// Newest first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SavedRoute>, Error>;
    /// Returns whether a route was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, Error>;
}

#[derive(Debug, Default)]
pub struct MemoryRouteStore {
    routes: RwLock<HashMap<Uuid, SavedRoute>>,
}

impl MemoryRouteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RouteStore for MemoryRouteStore {
    async fn insert(&self, route: &SavedRoute) -> Result<(), Error> {
        self.routes.write().await.insert(route.id, route.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<SavedRoute>, Error> {
        Ok(self.routes.read().await.get(&id).cloned())
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SavedRoute>, Error> {
        let mut routes: Vec<SavedRoute> = self
            .routes
            .read()
            .await
            .values()
            .filter(|route| route.user_id == user_id)
            .cloned()
            .collect();
        routes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(routes)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, Error> {
        Ok(self.routes.write().await.remove(&id).is_some())
    }
}

pub struct PgRouteStore {
    pool: Pool<Postgres>,
}

impl PgRouteStore {
    #[tracing::instrument(name = "PgRouteStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        // TODO: move this to migrations
        pool.execute("CREATE TABLE IF NOT EXISTS saved_routes (id UUID PRIMARY KEY, user_id VARCHAR NOT NULL, created_at TIMESTAMPTZ NOT NULL, data JSONB NOT NULL)")
            .await?;
        pool.execute("CREATE INDEX IF NOT EXISTS saved_routes_user_id ON saved_routes (user_id, created_at DESC)")
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl RouteStore for PgRouteStore {
    #[tracing::instrument(skip(self, route), fields(id = %route.id))]
    async fn insert(&self, route: &SavedRoute) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query(
                "INSERT INTO saved_routes (id, user_id, created_at, data) VALUES ($1, $2, $3, $4)",
            )
            .bind(&route.id)
            .bind(&route.user_id)
            .bind(&route.created_at)
            .bind(Json(route)),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn find(&self, id: Uuid) -> Result<Option<SavedRoute>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM saved_routes WHERE id = $1").bind(&id))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(route): Json<SavedRoute> = result.try_get("data")?;
                Ok(Some(route))
            }
            None => Ok(None),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SavedRoute>, Error> {
        let mut conn = self.pool.acquire().await?;

        let mut results = conn.fetch(
            sqlx::query(
                "SELECT data FROM saved_routes WHERE user_id = $1 ORDER BY created_at DESC",
            )
            .bind(user_id),
        );

        let mut routes = Vec::new();
        while let Some(row) = results.try_next().await? {
            let Json(route): Json<SavedRoute> = row.try_get("data")?;
            routes.push(route);
        }

        Ok(routes)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<bool, Error> {
        let mut conn = self.pool.acquire().await?;

        let result = conn
            .execute(sqlx::query("DELETE FROM saved_routes WHERE id = $1").bind(&id))
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
