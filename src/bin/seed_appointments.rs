// ABOUTME: Appointment seeder that creates users and books each one with a fixed worker
// ABOUTME: Each iteration registers a user, reserves a slot on the worker, then books it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Appointment seeder for the `DyCare` scheduling API.
//!
//! Usage:
//! ```bash
//! # 10 users booked with one worker
//! cargo run --bin seed-appointments -- --worker-id 6710c0ffee
//!
//! # Worker from the environment, 25 iterations, faster pacing
//! SEED_WORKER_ID=6710c0ffee cargo run --bin seed-appointments -- --count 25 --delay-ms 200
//! ```

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dycare_core::constants::defaults;
use dycare_core::errors::SeedError;
use dycare_seeder::client::SubmissionClient;
use dycare_seeder::config::{env_keys, normalize_base_url, SeederConfig};
use dycare_seeder::driver::AppointmentDriver;
use dycare_seeder::generator::{resolve_seed, RecordGenerator};
use dycare_seeder::logging::LoggingConfig;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "seed-appointments",
    about = "DyCare appointment seeder",
    long_about = "Create synthetic users and book an appointment for each with one worker"
)]
struct SeedArgs {
    /// API base URL (default: SEED_API_BASE_URL or http://localhost:3001)
    #[arg(long)]
    base_url: Option<String>,

    /// Worker to book against (default: SEED_WORKER_ID)
    #[arg(long)]
    worker_id: Option<String>,

    /// Users to create and book
    #[arg(long, default_value_t = defaults::APPOINTMENT_USERS)]
    count: u32,

    /// Pause after each created user, milliseconds
    /// (default: SEED_APPOINTMENT_DELAY_MS or 1000)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Random seed for reproducible records
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl SeedArgs {
    fn apply(&self, config: &mut SeederConfig) -> anyhow::Result<()> {
        if let Some(raw) = &self.base_url {
            config.base_url = normalize_base_url(raw).context("invalid --base-url")?;
        }
        if let Some(ms) = self.delay_ms {
            config.appointment_delay = Duration::from_millis(ms);
        }
        if let Some(id) = self.worker_id.as_ref().filter(|id| !id.trim().is_empty()) {
            config.worker_id = Some(id.clone());
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

    let worker_id = config.worker_id.clone().ok_or_else(|| {
        SeedError::config(format!(
            "a worker id is required: pass --worker-id or set {}",
            env_keys::WORKER_ID
        ))
    })?;

    let seed = resolve_seed(args.seed);

    info!("DyCare Appointment Seeder");
    info!("   {}", config.summary());
    info!("   Worker ID: {worker_id}");
    info!("   Count: {} users", args.count);
    info!("   Delay: {}ms", config.appointment_delay.as_millis());
    info!("   Random seed: {seed}");

    let client = SubmissionClient::from_config(&config)?;
    let generator = RecordGenerator::from_seed(seed, config.generator_settings()?);
    let mut driver = AppointmentDriver::new(client, generator, worker_id, config.appointment_delay);

    let summary = driver.run(args.count).await?;
    info!("{summary}");

    if summary.all_booked() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(
            "{} of {} appointments booked",
            summary.booked, summary.attempted
        );
        Ok(ExitCode::FAILURE)
    }
}
