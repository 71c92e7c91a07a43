use super::{encode_component, resolve_all, NavigationError, Stop};
use crate::entities::RoutePoint;

const ROUTE_BASE: &str = "nmap://route/car";

/// `nmap://route/car?[slat..&sname=..&]v1lat..&dlat..&dname=..&appname=..`. No limit on the
/// number of waypoints.
pub(super) fn build(app_name: &str, points: &[RoutePoint]) -> Result<String, NavigationError> {
    let stops = resolve_all(points)?;

    let mut params: Vec<String> = Vec::with_capacity(stops.len() + 1);
    match stops.as_slice() {
        [] => return Err(NavigationError::EmptyRoute),
        [destination] => params.push(group("d", destination)),
        [start, waypoints @ .., destination] => {
            params.push(group("s", start));
            for (index, waypoint) in waypoints.iter().enumerate() {
                params.push(group(&format!("v{}", index + 1), waypoint));
            }
            params.push(group("d", destination));
        }
    }
    params.push(format!("appname={}", encode_component(app_name)));

    Ok(format!("{}?{}", ROUTE_BASE, params.join("&")))
}

fn group(prefix: &str, stop: &Stop) -> String {
    format!(
        "{p}lat={}&{p}lng={}&{p}name={}",
        stop.location.y(),
        stop.location.x(),
        stop.name,
        p = prefix
    )
}
