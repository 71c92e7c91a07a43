mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::{navigation, places, routes, sessions};

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/sessions", post(sessions::create))
        .route(
            "/sessions/:id",
            get(sessions::find).delete(sessions::discard),
        )
        .route(
            "/sessions/:id/points",
            post(sessions::add_place).put(sessions::reorder),
        )
        .route(
            "/sessions/:id/points/:place_id",
            delete(sessions::remove_place),
        )
        .route("/sessions/:id/similar", post(sessions::find_similar))
        .route(
            "/sessions/:id/navigation/:vendor",
            get(navigation::for_session),
        )
        .route("/navigation", post(navigation::build))
        .route("/routes", post(routes::save).get(routes::list))
        .route("/routes/:id", get(routes::find).delete(routes::delete))
        .route("/places/search", get(places::search))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
