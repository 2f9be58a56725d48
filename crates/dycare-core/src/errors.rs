// ABOUTME: Error types for seeding runs: configuration, URL and HTTP client failures
// ABOUTME: Per-record submission failures are outcomes, not errors; these cover setup problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Seeder Error Types
//!
//! A failed record never aborts a run, so individual submission failures are
//! reported as outcome values by the client. `SeedError` is reserved for the
//! problems that stop a run before it starts: a bad base URL, an invalid
//! configuration value, or an HTTP client that cannot be built.

use thiserror::Error;

/// Errors that prevent a seeding run from starting or completing.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SeedError {
    /// A configuration value is missing or out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API base URL or an endpoint path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be built or a request got no response
    #[cfg(feature = "http-errors")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl SeedError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result alias used across the seeder
pub type SeedResult<T> = Result<T, SeedError>;
