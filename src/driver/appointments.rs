// ABOUTME: Appointment run driver: create a user, then schedule and book a slot with one worker
// ABOUTME: Counts created users, booked appointments and slots left reserved without a booking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::time::Duration;

use chrono::Local;
use dycare_core::constants::endpoints;
use dycare_core::errors::SeedResult;
use tracing::{info, warn};

use crate::booking::AppointmentBooker;
use crate::client::SubmissionClient;
use crate::generator::{AgeRange, RecordGenerator};

/// Outcome of an appointment run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppointmentSummary {
    /// Iterations run
    pub attempted: u32,
    /// Users the server accepted
    pub users_created: u32,
    /// Appointments fully booked
    pub booked: u32,
    /// Slots reserved on the worker whose book step failed
    pub dangling_schedules: u32,
}

impl AppointmentSummary {
    /// Whether every iteration ended with a booked appointment
    #[must_use]
    pub const fn all_booked(&self) -> bool {
        self.booked == self.attempted
    }
}

impl fmt::Display for AppointmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Population complete! Created {} users with appointments ({} users registered, {} attempted)",
            self.booked, self.users_created, self.attempted
        )?;
        if self.dangling_schedules > 0 {
            write!(
                f,
                "; {} slots reserved without a booking",
                self.dangling_schedules
            )?;
        }
        Ok(())
    }
}

/// Creates users and books each of them with a fixed worker
pub struct AppointmentDriver {
    client: SubmissionClient,
    generator: RecordGenerator,
    worker_id: String,
    delay: Duration,
}

impl AppointmentDriver {
    /// Driver booking against `worker_id`, pausing `delay` after each created user
    #[must_use]
    pub fn new(
        client: SubmissionClient,
        generator: RecordGenerator,
        worker_id: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            client,
            generator,
            worker_id: worker_id.into(),
            delay,
        }
    }

    /// Run `count` create-then-book iterations
    ///
    /// # Errors
    ///
    /// Returns an error only if the user registration URL cannot be built
    pub async fn run(&mut self, count: u32) -> SeedResult<AppointmentSummary> {
        let mut summary = AppointmentSummary::default();
        let booker = AppointmentBooker::new(&self.client);

        for index in 1..=count {
            summary.attempted += 1;
            info!("Creating user {index}/{count}");

            let mut user = self.generator.user_with_id(AgeRange::APPOINTMENT);
            let outcome = self
                .client
                .submit(endpoints::REGISTER_USER, &mut user, &mut self.generator)
                .await?;
            if !outcome.is_success() {
                warn!("Failed to create user {}", user.name);
                continue;
            }
            summary.users_created += 1;
            info!("User created successfully: {}", user.name);

            let user_id = user.id.map(|id| id.to_string()).unwrap_or_default();
            let appointment =
                self.generator
                    .appointment(&user_id, &self.worker_id, Local::now().naive_local());

            let booking = booker.book(&user_id, &appointment).await;
            if booking.is_booked() {
                summary.booked += 1;
            } else if booking.schedule_left_dangling() {
                summary.dangling_schedules += 1;
            }

            tokio::time::sleep(self.delay).await;
        }

        Ok(summary)
    }
}
