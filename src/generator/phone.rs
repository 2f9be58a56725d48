// ABOUTME: Phone number generation with a configurable digit count
// ABOUTME: Numbers are uniform over [11..1, 99..9] so the length is always exact
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use dycare_core::constants::phone::{DEFAULT_DIGITS, MAX_DIGITS, MIN_DIGITS};
use dycare_core::errors::{SeedError, SeedResult};
use rand::Rng;

/// Shape of generated phone numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneFormat {
    digits: u32,
}

impl PhoneFormat {
    /// Phone numbers with the given number of digits
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `digits` is outside 7..=15
    pub fn new(digits: u32) -> SeedResult<Self> {
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(SeedError::config(format!(
                "phone digits must be between {MIN_DIGITS} and {MAX_DIGITS}, got {digits}"
            )));
        }
        Ok(Self { digits })
    }

    /// Number of digits per generated phone
    #[must_use]
    pub const fn digits(self) -> u32 {
        self.digits
    }

    /// Inclusive numeric bounds: all ones up to all nines
    #[must_use]
    pub const fn bounds(self) -> (u64, u64) {
        let upper = 10_u64.pow(self.digits) - 1;
        (upper / 9, upper)
    }

    /// Draw a phone number as a decimal string
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        let (low, high) = self.bounds();
        rng.gen_range(low..=high).to_string()
    }
}

impl Default for PhoneFormat {
    fn default() -> Self {
        Self {
            digits: DEFAULT_DIGITS,
        }
    }
}
