//! Geographic coordinate of a region

use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable 2D point (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const ZERO: Coordinate = Coordinate {
        latitude: 0.0,
        longitude: 0.0,
    };

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Center of several points: the mean of their latitudes and longitudes.
    ///
    /// An empty slice yields [`Coordinate::ZERO`].
    pub fn center(points: &[Coordinate]) -> Coordinate {
        if points.is_empty() {
            return Self::ZERO;
        }
        let count = points.len() as f64;
        let (lat, lon) = points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
        Coordinate::new(lat / count, lon / count)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
