//! Deep-link synthesis for external navigation apps.
//!
//! Builders are pure: they take the ordered points of a route and either produce the exact URI
//! string the vendor app parses, or a [`NavigationError`] naming what is wrong with the input.
//! Points are never dropped or truncated to make a route fit.

mod naver;
mod tmap;

use std::fmt;
use std::str::FromStr;

use geo_types::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entities::RoutePoint;

pub use tmap::MAX_PASS_POINTS;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("route has no points")]
    EmptyRoute,
    #[error("{vendor} supports at most {max} points, route has {count}")]
    UnsupportedPointCount {
        vendor: Vendor,
        count: usize,
        max: usize,
    },
    #[error("point {point_id} has no coordinates")]
    MissingCoordinates { point_id: String },
    #[error("point {point_id} has an unreadable coordinate {raw:?}")]
    InvalidCoordinates { point_id: String, raw: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vendor {
    Naver,
    Tmap,
}

impl Vendor {
    pub const ALL: [Vendor; 2] = [Vendor::Naver, Vendor::Tmap];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Naver => "naver",
            Self::Tmap => "tmap",
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown navigation vendor {0:?}")]
pub struct UnknownVendor(pub String);

impl FromStr for Vendor {
    type Err = UnknownVendor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "naver" => Ok(Self::Naver),
            "tmap" => Ok(Self::Tmap),
            _ => Err(UnknownVendor(s.to_string())),
        }
    }
}

/// Which Tmap URI form to emit. `Extended` adds numbered pass points between start and goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TmapMode {
    #[default]
    Standard,
    Extended,
}

impl FromStr for TmapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "extended" => Ok(Self::Extended),
            other => Err(format!("unknown tmap mode {:?}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct NavigationUriBuilder {
    app_name: String,
    tmap_mode: TmapMode,
}

impl NavigationUriBuilder {
    pub fn new(app_name: impl Into<String>, tmap_mode: TmapMode) -> Self {
        Self {
            app_name: app_name.into(),
            tmap_mode,
        }
    }

    pub fn build(&self, vendor: Vendor, points: &[RoutePoint]) -> Result<String, NavigationError> {
        match vendor {
            Vendor::Naver => naver::build(&self.app_name, points),
            Vendor::Tmap => tmap::build(self.tmap_mode, points),
        }
    }
}

impl Default for NavigationUriBuilder {
    fn default() -> Self {
        Self::new("tripline", TmapMode::Standard)
    }
}

/// A point with decoded coordinates (x = longitude, y = latitude) and a URI-encoded name.
struct Stop {
    location: Point<f64>,
    name: String,
}

impl Stop {
    fn resolve(point: &RoutePoint) -> Result<Self, NavigationError> {
        let coordinates = point
            .place
            .coordinates()
            .map_err(|err| NavigationError::InvalidCoordinates {
                point_id: point.id().to_string(),
                raw: err.raw().to_string(),
            })?
            .ok_or_else(|| NavigationError::MissingCoordinates {
                point_id: point.id().to_string(),
            })?;

        Ok(Self {
            location: coordinates.into(),
            name: encode_component(&point.place.title),
        })
    }
}

fn resolve_all(points: &[RoutePoint]) -> Result<Vec<Stop>, NavigationError> {
    points.iter().map(Stop::resolve).collect()
}

/// Percent-encodes like `encodeURIComponent` does for the characters that matter in a query value.
fn encode_component(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::entities::Place;

    #[test]
    fn parses_vendor_names() {
        assert_eq!("naver".parse::<Vendor>().unwrap(), Vendor::Naver);
        assert_eq!(" TMAP ".parse::<Vendor>().unwrap(), Vendor::Tmap);
        assert!("kakao".parse::<Vendor>().is_err());
    }

    #[test]
    fn missing_coordinates_fail_for_every_vendor() {
        let points = route(vec![
            located("a", "Start", "1270000000", "370000000"),
            Place::new("typed-in", "Somewhere"),
        ]);

        for vendor in Vendor::ALL {
            let err = NavigationUriBuilder::default()
                .build(vendor, &points)
                .unwrap_err();
            assert_eq!(
                err,
                NavigationError::MissingCoordinates {
                    point_id: "typed-in".into()
                },
                "{}",
                vendor
            );
        }
    }

    #[test]
    fn unreadable_coordinates_are_reported() {
        let points = route(vec![located("a", "Start", "east", "370000000")]);

        let err = NavigationUriBuilder::default()
            .build(Vendor::Naver, &points)
            .unwrap_err();
        assert_eq!(
            err,
            NavigationError::InvalidCoordinates {
                point_id: "a".into(),
                raw: "east".into()
            }
        );
    }

    #[test]
    fn non_finite_coordinates_never_reach_the_uri() {
        for (mapx, mapy, raw) in [
            ("NaN", "370000000", "NaN"),
            ("1270000000", "inf", "inf"),
            ("1e400", "370000000", "1e400"),
        ] {
            let points = route(vec![located("a", "Tower", mapx, mapy)]);

            for vendor in Vendor::ALL {
                let err = NavigationUriBuilder::default()
                    .build(vendor, &points)
                    .unwrap_err();
                assert_eq!(
                    err,
                    NavigationError::InvalidCoordinates {
                        point_id: "a".into(),
                        raw: raw.into()
                    },
                    "{} {}",
                    vendor,
                    raw
                );
            }
        }
    }

    #[test]
    fn encodes_names_like_encode_uri_component() {
        assert_eq!(encode_component("N Seoul Tower"), "N%20Seoul%20Tower");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("남산"), "%EB%82%A8%EC%82%B0");
    }
}
