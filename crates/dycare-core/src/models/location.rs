// ABOUTME: Geographic coordinate pair attached to user and worker records
// ABOUTME: Coordinates are rounded to a fixed number of decimal places on construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::constants::ranges::COORDINATE_DECIMALS;

/// Latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude, -90 to 90
    pub latitude: f64,
    /// Longitude, -180 to 180
    pub longitude: f64,
}

impl Location {
    /// Build a location, rounding both coordinates to six decimal places
    #[must_use]
    pub fn rounded(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round_coordinate(latitude),
            longitude: round_coordinate(longitude),
        }
    }

    /// Whether both coordinates fall inside the valid geographic ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

fn round_coordinate(value: f64) -> f64 {
    let scale = 10_f64.powi(COORDINATE_DECIMALS);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_to_six_places() {
        let loc = Location::rounded(19.218_345_678, 72.978_100_49);
        assert!((loc.latitude - 19.218_346).abs() < 1e-9);
        assert!((loc.longitude - 72.978_1).abs() < 1e-9);
    }

    #[test]
    fn test_validity_bounds() {
        assert!(Location::rounded(90.0, -180.0).is_valid());
        assert!(!Location::rounded(90.5, 0.0).is_valid());
        assert!(!Location::rounded(0.0, 180.1).is_valid());
    }
}
