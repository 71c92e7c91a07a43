use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::SavedRoute;
use crate::error::Error;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveParams {
    session_id: Uuid,
    name: String,
    user_id: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    user_id: String,
}

pub async fn save(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SaveParams>,
) -> Result<Json<SavedRoute>, Error> {
    let route = api
        .save_route(params.session_id, params.name, params.user_id)
        .await?;

    Ok(route.into())
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<SavedRoute>>, Error> {
    let routes = api.list_saved_routes(&params.user_id).await?;

    Ok(routes.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<SavedRoute>, Error> {
    let route = api.find_saved_route(id).await?;

    Ok(route.into())
}

pub async fn delete(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, Error> {
    let removed = api.delete_saved_route(id).await?;

    Ok(Json(json!({ "success": true, "removed": removed })))
}
