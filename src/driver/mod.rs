// ABOUTME: Run drivers that sequence record generation and submission per category
// ABOUTME: Shared tally and summary types for registration and appointment runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Run Drivers
//!
//! Drivers loop over a fixed target count, generate a record, submit it, count
//! the successes and sleep between requests. A failed record is logged and the
//! loop moves on; nothing short of a setup error stops a run.

/// Appointment seeding: register a user, then schedule and book a slot
pub mod appointments;
/// Registration seeding for users and every worker role
pub mod registration;

pub use appointments::{AppointmentDriver, AppointmentSummary};
pub use registration::RegistrationDriver;

use std::fmt;

use dycare_core::constants::defaults;
use dycare_core::models::WorkerRole;

use crate::client::SubmitOutcome;

/// A category of records with its own target count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordCategory {
    /// Patients
    Users,
    /// Care workers of one role
    Workers(WorkerRole),
}

impl RecordCategory {
    /// Categories in the order a registration run processes them
    #[must_use]
    pub fn registration_order() -> Vec<Self> {
        let mut order = vec![Self::Users];
        order.extend(WorkerRole::ALL.into_iter().map(Self::Workers));
        order
    }

    /// Singular lowercase noun for progress logs
    #[must_use]
    pub const fn singular(self) -> &'static str {
        match self {
            Self::Users => "user",
            Self::Workers(role) => role.as_str(),
        }
    }

    /// Capitalized plural for summaries
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Workers(role) => role.plural_label(),
        }
    }
}

/// Per-category target counts for a registration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTargets {
    /// Users to register
    pub users: u32,
    /// Nurses to register
    pub nurses: u32,
    /// Physiotherapists to register
    pub physiotherapists: u32,
    /// Counselors to register
    pub counselors: u32,
    /// Caretakers to register
    pub caretakers: u32,
}

impl RoleTargets {
    /// Same target for every category
    #[must_use]
    pub const fn uniform(count: u32) -> Self {
        Self {
            users: count,
            nurses: count,
            physiotherapists: count,
            counselors: count,
            caretakers: count,
        }
    }

    /// Target for one category
    #[must_use]
    pub const fn target(&self, category: RecordCategory) -> u32 {
        match category {
            RecordCategory::Users => self.users,
            RecordCategory::Workers(WorkerRole::Nurse) => self.nurses,
            RecordCategory::Workers(WorkerRole::Physiotherapist) => self.physiotherapists,
            RecordCategory::Workers(WorkerRole::Counselor) => self.counselors,
            RecordCategory::Workers(WorkerRole::Caretaker) => self.caretakers,
        }
    }
}

impl Default for RoleTargets {
    fn default() -> Self {
        Self {
            users: defaults::USERS,
            nurses: defaults::WORKERS_PER_ROLE,
            physiotherapists: defaults::WORKERS_PER_ROLE,
            counselors: defaults::WORKERS_PER_ROLE,
            caretakers: defaults::WORKERS_PER_ROLE,
        }
    }
}

/// Counters for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleTally {
    /// Category counted
    pub category: RecordCategory,
    /// Records the run set out to register
    pub target: u32,
    /// Records generated and submitted
    pub attempted: u32,
    /// Records the server accepted
    pub succeeded: u32,
    /// HTTP requests sent, retries included
    pub requests: u32,
}

impl RoleTally {
    /// Empty tally
    #[must_use]
    pub const fn new(category: RecordCategory, target: u32) -> Self {
        Self {
            category,
            target,
            attempted: 0,
            succeeded: 0,
            requests: 0,
        }
    }

    /// Count one submitted record
    pub fn record(&mut self, outcome: &SubmitOutcome) {
        self.attempted += 1;
        self.requests += outcome.attempts();
        if outcome.is_success() {
            self.succeeded += 1;
        }
    }

    /// Records that were not accepted
    #[must_use]
    pub const fn failed(&self) -> u32 {
        self.attempted - self.succeeded
    }

    /// Whether every targeted record was accepted
    #[must_use]
    pub const fn target_met(&self) -> bool {
        self.succeeded == self.target
    }
}

/// Outcome of a registration run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One tally per category, in run order
    pub tallies: Vec<RoleTally>,
}

impl RunSummary {
    /// Tally for `category`, if the run processed it
    #[must_use]
    pub fn tally(&self, category: RecordCategory) -> Option<&RoleTally> {
        self.tallies.iter().find(|t| t.category == category)
    }

    /// Whether every category, users included, hit its target
    #[must_use]
    pub fn all_targets_met(&self) -> bool {
        self.tallies.iter().all(RoleTally::target_met)
    }

    /// Accepted records across all categories
    #[must_use]
    pub fn total_succeeded(&self) -> u32 {
        self.tallies.iter().map(|t| t.succeeded).sum()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(30);
        writeln!(f, "Final Registration Summary:")?;
        writeln!(f, "{rule}")?;
        for tally in &self.tallies {
            writeln!(
                f,
                "{}: {}/{}",
                tally.category.label(),
                tally.succeeded,
                tally.target
            )?;
        }
        writeln!(f, "{rule}")?;
        if self.all_targets_met() {
            write!(f, "Database population completed successfully!")
        } else {
            write!(f, "Database population completed with some failures.")
        }
    }
}
