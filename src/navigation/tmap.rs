use super::{resolve_all, NavigationError, Stop, TmapMode, Vendor};
use crate::entities::RoutePoint;

const ROUTE_BASE: &str = "tmap://route";

pub const MAX_PASS_POINTS: usize = 5;

fn max_points(mode: TmapMode) -> usize {
    match mode {
        TmapMode::Standard => 2,
        TmapMode::Extended => MAX_PASS_POINTS + 2,
    }
}

/// `tmap://route?[startx..&startname=..&][passx1..&]goalx..&goalname=..`
pub(super) fn build(mode: TmapMode, points: &[RoutePoint]) -> Result<String, NavigationError> {
    let max = max_points(mode);
    if points.is_empty() {
        return Err(NavigationError::EmptyRoute);
    }
    if points.len() > max {
        return Err(NavigationError::UnsupportedPointCount {
            vendor: Vendor::Tmap,
            count: points.len(),
            max,
        });
    }

    let stops = resolve_all(points)?;

    let mut params: Vec<String> = Vec::with_capacity(stops.len());
    match stops.as_slice() {
        [] => return Err(NavigationError::EmptyRoute),
        [goal] => params.push(group("goal", "", goal)),
        [start, passes @ .., goal] => {
            params.push(group("start", "", start));
            for (index, pass) in passes.iter().enumerate() {
                params.push(group("pass", &(index + 1).to_string(), pass));
            }
            params.push(group("goal", "", goal));
        }
    }

    Ok(format!("{}?{}", ROUTE_BASE, params.join("&")))
}

fn group(prefix: &str, suffix: &str, stop: &Stop) -> String {
    format!(
        "{p}x{s}={}&{p}y{s}={}&{p}name{s}={}",
        stop.location.x(),
        stop.location.y(),
        stop.name,
        p = prefix,
        s = suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Place;
    use crate::navigation::test_support::*;

    fn points(count: usize) -> Vec<RoutePoint> {
        route(
            (0..count)
                .map(|i| {
                    located(
                        &format!("p{}", i),
                        &format!("Stop {}", i),
                        &format!("{}", 1270000000 + i * 1000000),
                        &format!("{}", 370000000 + i * 1000000),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn empty_route_is_rejected() {
        assert_eq!(
            build(TmapMode::Standard, &[]).unwrap_err(),
            NavigationError::EmptyRoute
        );
    }

    #[test]
    fn single_point_is_goal_only() {
        let uri = build(TmapMode::Standard, &points(1)).unwrap();
        assert_eq!(uri, "tmap://route?goalx=127&goaly=37&goalname=Stop%200");
    }

    #[test]
    fn two_points_are_start_and_goal() {
        let uri = build(TmapMode::Standard, &points(2)).unwrap();
        assert_eq!(
            uri,
            "tmap://route?startx=127&starty=37&startname=Stop%200\
             &goalx=127.1&goaly=37.1&goalname=Stop%201"
        );
    }

    #[test]
    fn three_points_are_not_truncated() {
        let err = build(TmapMode::Standard, &points(3)).unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnsupportedPointCount {
                vendor: Vendor::Tmap,
                count: 3,
                max: 2
            }
        );
    }

    #[test]
    fn count_is_checked_before_coordinates() {
        let mut route = points(2);
        route.push(RoutePoint {
            place: Place::new("typed-in", "No coordinates"),
            role: crate::entities::Role::End,
        });

        assert!(matches!(
            build(TmapMode::Standard, &route),
            Err(NavigationError::UnsupportedPointCount { .. })
        ));
    }

    #[test]
    fn extended_mode_numbers_pass_points() {
        let uri = build(TmapMode::Extended, &points(4)).unwrap();
        assert_eq!(
            uri,
            "tmap://route?startx=127&starty=37&startname=Stop%200\
             &passx1=127.1&passy1=37.1&passname1=Stop%201\
             &passx2=127.2&passy2=37.2&passname2=Stop%202\
             &goalx=127.3&goaly=37.3&goalname=Stop%203"
        );
    }

    #[test]
    fn extended_mode_caps_pass_points() {
        assert!(build(TmapMode::Extended, &points(MAX_PASS_POINTS + 2)).is_ok());

        let err = build(TmapMode::Extended, &points(MAX_PASS_POINTS + 3)).unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnsupportedPointCount {
                vendor: Vendor::Tmap,
                count: 8,
                max: 7
            }
        );
    }
}
