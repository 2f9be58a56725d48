// ABOUTME: Tests for loading seeder configuration from process environment variables
// ABOUTME: Runs serially because the tests mutate the shared environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::time::Duration;

use dycare_seeder::config::{env_keys, SeederConfig};
use dycare_seeder::generator::LocationMode;
use serial_test::serial;

const ALL_KEYS: [&str; 9] = [
    env_keys::BASE_URL,
    env_keys::REQUEST_DELAY_MS,
    env_keys::APPOINTMENT_DELAY_MS,
    env_keys::MAX_ATTEMPTS,
    env_keys::TRANSPORT_BACKOFF_MS,
    env_keys::HTTP_TIMEOUT_SECS,
    env_keys::PHONE_DIGITS,
    env_keys::LOCATION_MODE,
    env_keys::WORKER_ID,
];

fn clear_env() {
    for key in ALL_KEYS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    let config = SeederConfig::from_env().unwrap();
    assert_eq!(config.base_url.as_str(), "http://localhost:3001/");
    assert_eq!(config.request_delay, Duration::from_millis(500));
    assert_eq!(config.appointment_delay, Duration::from_millis(1000));
    assert!(config.worker_id.is_none());
    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn test_from_env_reads_every_key() {
    clear_env();
    env::set_var(env_keys::BASE_URL, "http://api.dycare.test:8080");
    env::set_var(env_keys::REQUEST_DELAY_MS, "25");
    env::set_var(env_keys::APPOINTMENT_DELAY_MS, "75");
    env::set_var(env_keys::MAX_ATTEMPTS, "4");
    env::set_var(env_keys::TRANSPORT_BACKOFF_MS, "10");
    env::set_var(env_keys::HTTP_TIMEOUT_SECS, "3");
    env::set_var(env_keys::PHONE_DIGITS, "12");
    env::set_var(env_keys::LOCATION_MODE, "global");
    env::set_var(env_keys::WORKER_ID, "worker-9");

    let config = SeederConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.base_url.as_str(), "http://api.dycare.test:8080/");
    assert_eq!(config.request_delay, Duration::from_millis(25));
    assert_eq!(config.appointment_delay, Duration::from_millis(75));
    assert_eq!(config.retry.max_attempts, 4);
    assert_eq!(config.retry.transport_backoff, Duration::from_millis(10));
    assert_eq!(config.http_timeout, Duration::from_secs(3));
    assert_eq!(config.phone_digits, 12);
    assert_eq!(config.location_mode, LocationMode::Global);
    assert_eq!(config.worker_id.as_deref(), Some("worker-9"));

    let settings = config.generator_settings().unwrap();
    assert_eq!(settings.phone.digits(), 12);
    assert!(config.summary().contains("location=global"));
}

#[test]
#[serial]
fn test_from_env_rejects_bad_values() {
    clear_env();
    env::set_var(env_keys::PHONE_DIGITS, "20");
    let config = SeederConfig::from_env().unwrap();
    assert!(config.validate().is_err());
    assert!(config.generator_settings().is_err());

    env::set_var(env_keys::LOCATION_MODE, "ocean");
    assert!(SeederConfig::from_env().is_err());
    clear_env();
}
