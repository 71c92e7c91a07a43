use tracing_subscriber::EnvFilter;

use tripline::config::Config;
use tripline::db::{MemoryRouteStore, PgRouteStore};
use tripline::engine::Engine;
use tripline::error::Error;
use tripline::external::LocalSearchClient;
use tripline::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tripline=info")),
        )
        .init();

    let config = Config::from_env()?;

    let engine = match &config.database_url {
        Some(url) => {
            let store = PgRouteStore::new(url, config.database_max_connections).await?;
            Engine::new(store, config.navigation())
        }
        None => {
            tracing::warn!("DATABASE_URL not set, saved routes are kept in memory");
            Engine::new(MemoryRouteStore::new(), config.navigation())
        }
    };

    let engine = engine.with_session_ttl(config.session_ttl);

    let engine = match &config.local_search_api_base {
        Some(base) => engine.with_lookup(LocalSearchClient::new(base.as_str())),
        None => engine,
    };

    tracing::info!(tmap_mode = ?config.tmap_mode, "engine ready");

    serve(engine, config.addr).await
}
