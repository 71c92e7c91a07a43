use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::{Place, RoutePoint, Session};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct ReorderParams {
    ids: Vec<String>,
}

pub async fn create(Extension(api): Extension<DynAPI>) -> Result<Json<Session>, Error> {
    let session = api.create_session().await?;

    Ok(session.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Session>, Error> {
    let session = api.find_session(id).await?;

    Ok(session.into())
}

pub async fn discard(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    api.discard_session(id).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn add_place(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(place): Json<Place>,
) -> Result<Json<Session>, Error> {
    let session = api.add_place(id, place).await?;

    Ok(session.into())
}

pub async fn remove_place(
    Extension(api): Extension<DynAPI>,
    Path((id, place_id)): Path<(Uuid, String)>,
) -> Result<Json<Session>, Error> {
    let session = api.remove_place(id, &place_id).await?;

    Ok(session.into())
}

pub async fn reorder(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(params): Json<ReorderParams>,
) -> Result<Json<Session>, Error> {
    let session = api.reorder_places(id, params.ids).await?;

    Ok(session.into())
}

pub async fn find_similar(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
    Json(place): Json<Place>,
) -> Result<Json<Option<RoutePoint>>, Error> {
    let similar = api.find_similar_place(id, place).await?;

    Ok(similar.into())
}
