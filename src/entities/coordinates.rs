use std::num::ParseFloatError;

use geo_types::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw `mapx`/`mapy` values are decimal degrees scaled by 10^7.
pub const COORDINATE_SCALE: f64 = 10_000_000.0;

#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("invalid coordinate {raw:?}: {source}")]
    NotANumber {
        raw: String,
        #[source]
        source: ParseFloatError,
    },
    // `f64::from_str` accepts "NaN", "inf" and overflowing literals
    #[error("coordinate {raw:?} is not a finite number")]
    NotFinite { raw: String },
}

impl CoordinateError {
    pub fn raw(&self) -> &str {
        match self {
            Self::NotANumber { raw, .. } | Self::NotFinite { raw } => raw,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinates {
    pub fn decode(mapx: &str, mapy: &str) -> Result<Self, CoordinateError> {
        Ok(Self {
            longitude: decode_degrees(mapx)?,
            latitude: decode_degrees(mapy)?,
        })
    }

    /// Returns `(mapx, mapy)`.
    pub fn encode(&self) -> (String, String) {
        (encode_degrees(self.longitude), encode_degrees(self.latitude))
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

pub fn decode_degrees(raw: &str) -> Result<f64, CoordinateError> {
    let scaled: f64 = raw
        .trim()
        .parse()
        .map_err(|source| CoordinateError::NotANumber {
            raw: raw.to_string(),
            source,
        })?;
    if !scaled.is_finite() {
        return Err(CoordinateError::NotFinite {
            raw: raw.to_string(),
        });
    }

    Ok(scaled / COORDINATE_SCALE)
}

pub fn encode_degrees(degrees: f64) -> String {
    format!("{}", (degrees * COORDINATE_SCALE).round() as i64)
}
