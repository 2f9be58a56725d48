// ABOUTME: Location sampling strategies for generated users and workers
// ABOUTME: Locality mode perturbs a named Mumbai base point; global mode samples the whole globe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use dycare_core::constants::geography::MUMBAI_LOCALITIES;
use dycare_core::constants::ranges::LOCALITY_JITTER_DEGREES;
use dycare_core::errors::SeedError;
use dycare_core::models::Location;
use rand::seq::SliceRandom;
use rand::Rng;

/// How generated coordinates are drawn
///
/// The two modes are separate strategies. A run uses exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMode {
    /// A Mumbai locality plus a uniform offset of at most 0.01 degrees per axis
    #[default]
    Locality,
    /// Latitude uniform over [-90, 90], longitude uniform over [-180, 180]
    Global,
}

impl LocationMode {
    /// Draw one location
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Location {
        match self {
            Self::Locality => near_locality(rng),
            Self::Global => Location::rounded(
                rng.gen_range(-90.0..=90.0),
                rng.gen_range(-180.0..=180.0),
            ),
        }
    }
}

fn near_locality<R: Rng + ?Sized>(rng: &mut R) -> Location {
    let Some(base) = MUMBAI_LOCALITIES.choose(rng) else {
        return Location::rounded(0.0, 0.0);
    };
    Location::rounded(
        base.latitude + rng.gen_range(-LOCALITY_JITTER_DEGREES..=LOCALITY_JITTER_DEGREES),
        base.longitude + rng.gen_range(-LOCALITY_JITTER_DEGREES..=LOCALITY_JITTER_DEGREES),
    )
}

impl FromStr for LocationMode {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "locality" => Ok(Self::Locality),
            "global" => Ok(Self::Global),
            other => Err(SeedError::config(format!(
                "unknown location mode '{other}' (expected locality or global)"
            ))),
        }
    }
}

impl fmt::Display for LocationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Locality => f.write_str("locality"),
            Self::Global => f.write_str("global"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_locality_samples_stay_near_a_base_point() {
        let mut rng = StdRng::seed_from_u64(42);
        let tolerance = LOCALITY_JITTER_DEGREES + 1e-6;
        for _ in 0..500 {
            let loc = LocationMode::Locality.sample(&mut rng);
            assert!(MUMBAI_LOCALITIES.iter().any(|base| {
                (loc.latitude - base.latitude).abs() <= tolerance
                    && (loc.longitude - base.longitude).abs() <= tolerance
            }));
        }
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("GLOBAL".parse::<LocationMode>().unwrap(), LocationMode::Global);
        assert_eq!(
            "locality".parse::<LocationMode>().unwrap(),
            LocationMode::Locality
        );
        assert!("uniform".parse::<LocationMode>().is_err());
    }
}
