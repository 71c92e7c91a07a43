use std::env;
use std::net::SocketAddr;

use chrono::Duration;

use crate::engine::DEFAULT_SESSION_TTL_SECS;
use crate::error::{config_error, Error};
use crate::navigation::{NavigationUriBuilder, TmapMode};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_APP_NAME: &str = "tripline";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub local_search_api_base: Option<String>,
    pub naver_app_name: String,
    pub tmap_mode: TmapMode,
    pub session_ttl: Duration,
}

impl Config {
    /// Reads the process environment, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let addr: SocketAddr = var("TRIPLINE_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.into())
            .parse()
            .map_err(config_error)?;

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value.parse::<u32>().map_err(config_error)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let tmap_mode = match var("TMAP_MODE") {
            Some(value) => value.parse::<TmapMode>().map_err(config_error)?,
            None => TmapMode::default(),
        };

        let session_ttl_secs = match var("SESSION_TTL_SECS") {
            Some(value) => match value.parse::<u32>().map_err(config_error)? {
                0 => return Err(config_error("SESSION_TTL_SECS must be positive")),
                secs => i64::from(secs),
            },
            None => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            addr,
            database_url: var("DATABASE_URL"),
            database_max_connections,
            local_search_api_base: var("LOCAL_SEARCH_API_BASE"),
            naver_app_name: var("NAVER_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into()),
            tmap_mode,
            session_ttl: Duration::seconds(session_ttl_secs),
        })
    }

    pub fn navigation(&self) -> NavigationUriBuilder {
        NavigationUriBuilder::new(self.naver_app_name.clone(), self.tmap_mode)
    }
}
