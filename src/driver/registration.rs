// ABOUTME: Registration run driver for users, nurses, physiotherapists, counselors and caretakers
// ABOUTME: Submits exactly the target count per category and tallies accepted records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use dycare_core::constants::endpoints;
use dycare_core::errors::SeedResult;
use dycare_core::models::ContactPhone;
use serde::Serialize;
use tracing::info;

use super::{RecordCategory, RoleTally, RoleTargets, RunSummary};
use crate::client::SubmissionClient;
use crate::generator::{AgeRange, RecordGenerator};

/// Registers synthetic users and workers, one category after another
pub struct RegistrationDriver {
    client: SubmissionClient,
    generator: RecordGenerator,
    delay: Duration,
}

impl RegistrationDriver {
    /// Driver that pauses `delay` after every submitted record
    #[must_use]
    pub const fn new(client: SubmissionClient, generator: RecordGenerator, delay: Duration) -> Self {
        Self {
            client,
            generator,
            delay,
        }
    }

    /// Register every category up to its target
    ///
    /// # Errors
    ///
    /// Returns an error only if an endpoint URL cannot be built. Rejected or
    /// failed records are counted, not returned.
    pub async fn run(&mut self, targets: RoleTargets) -> SeedResult<RunSummary> {
        let mut summary = RunSummary::default();
        for category in RecordCategory::registration_order() {
            let tally = self.register_category(category, targets.target(category)).await?;
            summary.tallies.push(tally);
        }
        Ok(summary)
    }

    /// Register `target` records of one category
    ///
    /// # Errors
    ///
    /// Returns an error only if the category's endpoint URL cannot be built
    pub async fn register_category(
        &mut self,
        category: RecordCategory,
        target: u32,
    ) -> SeedResult<RoleTally> {
        match category {
            RecordCategory::Users => {
                self.register_batch(category, endpoints::REGISTER_USER, target, |gen| {
                    gen.user(AgeRange::REGISTRATION)
                })
                .await
            }
            RecordCategory::Workers(role) => {
                self.register_batch(category, role.endpoint(), target, |gen| gen.worker(role))
                    .await
            }
        }
    }

    async fn register_batch<R, F>(
        &mut self,
        category: RecordCategory,
        endpoint: &str,
        target: u32,
        mut make: F,
    ) -> SeedResult<RoleTally>
    where
        R: Serialize + ContactPhone,
        F: FnMut(&mut RecordGenerator) -> R,
    {
        let mut tally = RoleTally::new(category, target);

        for index in 1..=target {
            info!(
                "Attempting to register {} {index}/{target}",
                category.singular()
            );
            let mut record = make(&mut self.generator);
            let outcome = self
                .client
                .submit(endpoint, &mut record, &mut self.generator)
                .await?;
            tally.record(&outcome);

            tokio::time::sleep(self.delay).await;
        }

        info!(
            "Successfully registered {}/{target} {}",
            tally.succeeded,
            category.label().to_lowercase()
        );
        Ok(tally)
    }
}
