// ABOUTME: Core types and constants for the DyCare data seeder
// ABOUTME: Foundation crate with record models, category tables, endpoints, and errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # DyCare Core
//!
//! Shared types for the DyCare seeding tools. The records defined here mirror
//! the JSON bodies accepted by the scheduling API's registration and
//! appointment endpoints.
//!
//! ## Modules
//!
//! - **errors**: `SeedError` and the `SeedResult` alias
//! - **constants**: endpoint paths, category tables, localities and name pools
//! - **models**: user, worker and appointment records

/// Error types shared by the seeder library and binaries
pub mod errors;

/// Endpoint paths, fixed category tables and generation ranges
pub mod constants;

/// Wire records for users, workers and appointments
pub mod models;
