// ABOUTME: Configuration management module for seeding runs
// ABOUTME: Loads environment configuration and exposes the resolved SeederConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the DyCare seeders
//!
//! Precedence is command-line flag, then environment variable, then the
//! defaults in `dycare_core::constants::defaults`. The binaries load
//! `SeederConfig::from_env()`, apply their flags, and call `validate()`.

/// Environment-driven seeder configuration
pub mod environment;

pub use environment::{env_keys, normalize_base_url, SeederConfig};
