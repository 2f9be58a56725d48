// ABOUTME: Environment-based configuration for seeding runs
// ABOUTME: Base URL, pacing, retry bounds, HTTP timeout and record shape settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::str::FromStr;
use std::time::Duration;

use dycare_core::constants::{defaults, phone};
use dycare_core::errors::{SeedError, SeedResult};
use tracing::warn;
use url::Url;

use crate::client::{RetryPolicy, SuccessPolicy};
use crate::generator::{GeneratorSettings, LocationMode, PhoneFormat};

/// Environment variable names read by `SeederConfig::from_env`
pub mod env_keys {
    /// API base URL
    pub const BASE_URL: &str = "SEED_API_BASE_URL";
    /// Pause after each registration request, milliseconds
    pub const REQUEST_DELAY_MS: &str = "SEED_REQUEST_DELAY_MS";
    /// Pause after each appointment iteration that created a user, milliseconds
    pub const APPOINTMENT_DELAY_MS: &str = "SEED_APPOINTMENT_DELAY_MS";
    /// Attempts per record
    pub const MAX_ATTEMPTS: &str = "SEED_MAX_ATTEMPTS";
    /// Pause before retrying a transport error, milliseconds
    pub const TRANSPORT_BACKOFF_MS: &str = "SEED_TRANSPORT_BACKOFF_MS";
    /// HTTP request timeout, seconds
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_CLIENT_TIMEOUT_SECS";
    /// Phone number digit count
    pub const PHONE_DIGITS: &str = "SEED_PHONE_DIGITS";
    /// `locality` or `global`
    pub const LOCATION_MODE: &str = "SEED_LOCATION_MODE";
    /// Worker the appointment seeder books against
    pub const WORKER_ID: &str = "SEED_WORKER_ID";
}

/// Resolved configuration for a seeding run
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// API base URL, always ending in `/`
    pub base_url: Url,
    /// Pause after each registration request
    pub request_delay: Duration,
    /// Pause after each appointment iteration that created a user
    pub appointment_delay: Duration,
    /// Attempt budget and transport backoff
    pub retry: RetryPolicy,
    /// Statuses counted as a successful registration
    pub success_policy: SuccessPolicy,
    /// HTTP request timeout
    pub http_timeout: Duration,
    /// Phone number digit count
    pub phone_digits: u32,
    /// Coordinate sampling strategy
    pub location_mode: LocationMode,
    /// Worker identifier for appointment seeding
    pub worker_id: Option<String>,
}

impl SeederConfig {
    /// Load configuration from process environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SEED_API_BASE_URL` or `SEED_LOCATION_MODE` is set
    /// to an unparseable value
    pub fn from_env() -> SeedResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Numeric values that fail to parse fall back to their defaults with a
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or location mode cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> SeedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = normalize_base_url(
            lookup(env_keys::BASE_URL)
                .as_deref()
                .unwrap_or(defaults::BASE_URL),
        )?;

        let location_mode = match lookup(env_keys::LOCATION_MODE) {
            Some(raw) => raw.parse()?,
            None => LocationMode::default(),
        };

        Ok(Self {
            base_url,
            request_delay: Duration::from_millis(parse_or(
                &lookup,
                env_keys::REQUEST_DELAY_MS,
                defaults::REQUEST_DELAY_MS,
            )),
            appointment_delay: Duration::from_millis(parse_or(
                &lookup,
                env_keys::APPOINTMENT_DELAY_MS,
                defaults::APPOINTMENT_DELAY_MS,
            )),
            retry: RetryPolicy {
                max_attempts: parse_or(&lookup, env_keys::MAX_ATTEMPTS, defaults::MAX_ATTEMPTS),
                transport_backoff: Duration::from_millis(parse_or(
                    &lookup,
                    env_keys::TRANSPORT_BACKOFF_MS,
                    defaults::TRANSPORT_BACKOFF_MS,
                )),
            },
            success_policy: SuccessPolicy::default(),
            http_timeout: Duration::from_secs(parse_or(
                &lookup,
                env_keys::HTTP_TIMEOUT_SECS,
                defaults::HTTP_TIMEOUT_SECS,
            )),
            phone_digits: parse_or(&lookup, env_keys::PHONE_DIGITS, phone::DEFAULT_DIGITS),
            location_mode,
            worker_id: lookup(env_keys::WORKER_ID).filter(|id| !id.trim().is_empty()),
        })
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the attempt budget is zero, the phone digit count is
    /// unsupported, or the base URL is not http(s)
    pub fn validate(&self) -> SeedResult<()> {
        if self.retry.max_attempts == 0 {
            return Err(SeedError::config(format!(
                "{} must be at least 1",
                env_keys::MAX_ATTEMPTS
            )));
        }

        PhoneFormat::new(self.phone_digits)?;

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(SeedError::config(format!(
                "base URL must use http or https, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Generator settings derived from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the phone digit count is unsupported
    pub fn generator_settings(&self) -> SeedResult<GeneratorSettings> {
        Ok(GeneratorSettings {
            phone: PhoneFormat::new(self.phone_digits)?,
            location_mode: self.location_mode,
        })
    }

    /// One-line summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "base_url={} delay={}ms attempts={} timeout={}s phone_digits={} location={}",
            self.base_url,
            self.request_delay.as_millis(),
            self.retry.max_attempts,
            self.http_timeout.as_secs(),
            self.phone_digits,
            self.location_mode,
        )
    }
}

/// Parse a base URL and make sure its path ends in `/`
///
/// # Errors
///
/// Returns an error if `raw` is not an absolute URL
pub fn normalize_base_url(raw: &str) -> SeedResult<Url> {
    Ok(ensure_trailing_slash(Url::parse(raw.trim())?))
}

/// Append `/` to the URL path so relative endpoints join beneath it
pub(crate) fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {key}={raw}, using default");
            default
        }),
    }
}
