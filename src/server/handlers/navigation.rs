use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::DynAPI;
use crate::entities::Place;
use crate::error::Error;
use crate::navigation::Vendor;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildParams {
    navigation_type: String,
    // roles sent by the client are ignored
    route_points: Vec<Place>,
}

#[derive(Serialize, Deserialize)]
pub struct UriResponse {
    uri: String,
}

pub async fn for_session(
    Extension(api): Extension<DynAPI>,
    Path((id, vendor)): Path<(Uuid, String)>,
) -> Result<Json<UriResponse>, Error> {
    let vendor: Vendor = vendor.parse()?;
    let uri = api.build_navigation_uri(id, vendor).await?;

    Ok(Json(UriResponse { uri }))
}

pub async fn build(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<BuildParams>,
) -> Result<Json<UriResponse>, Error> {
    let vendor: Vendor = params.navigation_type.parse()?;
    let uri = api.build_uri(vendor, params.route_points).await?;

    Ok(Json(UriResponse { uri }))
}
