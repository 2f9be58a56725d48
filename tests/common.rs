// ABOUTME: Shared test utilities for the seeder integration tests
// ABOUTME: Mock-server clients with zero backoff, seeded generators and a closed-port URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `dycare_seeder`

use std::net::TcpListener;
use std::sync::Once;
use std::time::Duration;

use dycare_seeder::client::{RetryPolicy, SubmissionClient, SuccessPolicy};
use dycare_seeder::generator::{GeneratorSettings, RecordGenerator};
use url::Url;
use wiremock::MockServer;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Retry policy with the default attempt budget and no backoff
pub const fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        transport_backoff: Duration::ZERO,
    }
}

/// Client rooted at an arbitrary base URL
pub fn client_for(base: &str, success: SuccessPolicy) -> SubmissionClient {
    SubmissionClient::new(
        Url::parse(base).unwrap(),
        Duration::from_secs(5),
        fast_retry(),
        success,
    )
    .unwrap()
}

/// Client pointed at a mock server that gives up on responses after `timeout`
pub fn mock_client_with_timeout(server: &MockServer, timeout: Duration) -> SubmissionClient {
    SubmissionClient::new(
        Url::parse(&server.uri()).unwrap(),
        timeout,
        fast_retry(),
        SuccessPolicy::default(),
    )
    .unwrap()
}

/// Client pointed at a mock server
pub fn mock_client(server: &MockServer) -> SubmissionClient {
    client_for(&server.uri(), SuccessPolicy::default())
}

/// Deterministic generator with default settings
pub fn seeded_generator(seed: u64) -> RecordGenerator {
    RecordGenerator::from_seed(seed, GeneratorSettings::default())
}

/// Base URL of a local port with nothing listening on it
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}
