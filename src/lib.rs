// ABOUTME: Library entry point for the DyCare seeding tools
// ABOUTME: Record generation, HTTP submission with conflict retry, and run drivers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `DyCare` Seeder
//!
//! Populates a `DyCare` scheduling API with synthetic data for development and
//! load testing. Two runs are provided:
//!
//! - **Registration**: users plus nurses, physiotherapists, counselors and
//!   caretakers, each category up to its own target count.
//! - **Appointments**: for each iteration a new user is registered, a slot is
//!   reserved on a fixed worker and the slot is booked for that user.
//!
//! ## Architecture
//!
//! - **Generator**: random, schema-shaped records from a seedable RNG
//! - **Client**: POSTs records and resolves 409 phone conflicts by resubmitting
//!   with a fresh number
//! - **Booking**: the two-step schedule-then-book sequence
//! - **Driver**: loops, pacing, tallies and run summaries
//! - **Config**: environment variables with command-line overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use dycare_seeder::client::SubmissionClient;
//! use dycare_seeder::config::SeederConfig;
//! use dycare_seeder::driver::{RegistrationDriver, RoleTargets};
//! use dycare_seeder::generator::RecordGenerator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = SeederConfig::from_env()?;
//!     config.validate()?;
//!
//!     let client = SubmissionClient::from_config(&config)?;
//!     let generator = RecordGenerator::new(config.generator_settings()?);
//!     let mut driver = RegistrationDriver::new(client, generator, config.request_delay);
//!
//!     let summary = driver.run(RoleTargets::uniform(5)).await?;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

/// Two-step appointment booking
pub mod booking;

/// HTTP submission client with retry policy
pub mod client;

/// Environment configuration
pub mod config;

/// Registration and appointment run drivers
pub mod driver;

/// Synthetic record generation
pub mod generator;

/// Structured logging setup
pub mod logging;
