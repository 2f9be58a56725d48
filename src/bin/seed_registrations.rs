// ABOUTME: Registration seeder that populates the scheduling API with synthetic users and workers
// ABOUTME: Registers a target count per category and exits non-zero unless every target is met
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Registration seeder for the `DyCare` scheduling API.
//!
//! Usage:
//! ```bash
//! # 100 users and 10 workers per role against http://localhost:3001
//! cargo run --bin seed-registrations
//!
//! # Another server, fewer records
//! cargo run --bin seed-registrations -- --base-url http://staging:3001 --users 20 --nurses 5
//!
//! # Reproducible run, coordinates anywhere on the globe
//! cargo run --bin seed-registrations -- --seed 42 --location-mode global
//!
//! # Count only 200 OK as success
//! cargo run --bin seed-registrations -- --ok-only
//! ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dycare_seeder::client::{SubmissionClient, SuccessPolicy};
use dycare_seeder::config::{normalize_base_url, SeederConfig};
use dycare_seeder::driver::{RegistrationDriver, RoleTargets};
use dycare_seeder::generator::{resolve_seed, LocationMode, RecordGenerator};
use dycare_seeder::logging::LoggingConfig;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-registrations",
    about = "DyCare registration seeder",
    long_about = "Register synthetic users, nurses, physiotherapists, counselors and caretakers"
)]
struct SeedArgs {
    /// API base URL (default: SEED_API_BASE_URL or http://localhost:3001)
    #[arg(long)]
    base_url: Option<String>,

    /// Users to register
    #[arg(long, default_value = "100")]
    users: u32,

    /// Nurses to register
    #[arg(long, default_value = "10")]
    nurses: u32,

    /// Physiotherapists to register
    #[arg(long, default_value = "10")]
    physiotherapists: u32,

    /// Counselors to register
    #[arg(long, default_value = "10")]
    counselors: u32,

    /// Caretakers to register
    #[arg(long, default_value = "10")]
    caretakers: u32,

    /// Pause after each record, milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Attempts per record, first one included
    #[arg(long)]
    max_attempts: Option<u32>,

    /// How coordinates are generated: locality or global
    #[arg(long)]
    location_mode: Option<LocationMode>,

    /// Digits per phone number (7 to 15)
    #[arg(long)]
    phone_digits: Option<u32>,

    /// Count 200 OK and 201 Created as success (default)
    #[arg(long, conflicts_with = "ok_only")]
    accept_created: bool,

    /// Count only 200 OK as success
    #[arg(long)]
    ok_only: bool,

    /// Random seed for reproducible records
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl SeedArgs {
    fn targets(&self) -> RoleTargets {
        RoleTargets {
            users: self.users,
            nurses: self.nurses,
            physiotherapists: self.physiotherapists,
            counselors: self.counselors,
            caretakers: self.caretakers,
        }
    }

    fn apply(&self, config: &mut SeederConfig) -> anyhow::Result<()> {
        if let Some(raw) = &self.base_url {
            config.base_url = normalize_base_url(raw).context("invalid --base-url")?;
        }
        if let Some(ms) = self.delay_ms {
            config.request_delay = Duration::from_millis(ms);
        }
        if let Some(attempts) = self.max_attempts {
            config.retry.max_attempts = attempts;
        }
        if let Some(mode) = self.location_mode {
            config.location_mode = mode;
        }
        if let Some(digits) = self.phone_digits {
            config.phone_digits = digits;
        }
        if self.ok_only {
            config.success_policy = SuccessPolicy::OkOnly;
        } else if self.accept_created {
            config.success_policy = SuccessPolicy::OkOrCreated;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = SeedArgs::parse();

    LoggingConfig::from_env(args.verbose).init()?;

    let mut config = SeederConfig::from_env().context("failed to load configuration")?;
    args.apply(&mut config)?;
    config.validate()?;

    let seed = resolve_seed(args.seed);
    let targets = args.targets();

    info!("DyCare Registration Seeder");
    info!("   {}", config.summary());
    info!(
        "   Targets: {} users, {} nurses, {} physiotherapists, {} counselors, {} caretakers",
        targets.users,
        targets.nurses,
        targets.physiotherapists,
        targets.counselors,
        targets.caretakers
    );
    info!("   Random seed: {seed}");

    let client = SubmissionClient::from_config(&config)?;
    let generator = RecordGenerator::from_seed(seed, config.generator_settings()?);
    let mut driver = RegistrationDriver::new(client, generator, config.request_delay);

    let summary = driver.run(targets).await?;

    for line in summary.to_string().lines() {
        info!("{line}");
    }

    if summary.all_targets_met() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(
            "{} of {} records registered",
            summary.total_succeeded(),
            summary.tallies.iter().map(|t| t.target).sum::<u32>()
        );
        Ok(ExitCode::FAILURE)
    }
}
