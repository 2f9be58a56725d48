// ABOUTME: Worker registration record and the four worker roles
// ABOUTME: Each role maps to its endpoint, education levels and specializations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ContactPhone, Location};
use crate::constants::{categories, endpoints};

/// Category of care worker
///
/// Also used as a user's preferred worker type, which shares the same
/// lowercase wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    /// Registered nurse
    Nurse,
    /// Physiotherapist
    Physiotherapist,
    /// Counselor
    Counselor,
    /// Caretaker
    Caretaker,
}

impl WorkerRole {
    /// All roles, in registration order
    pub const ALL: [Self; 4] = [
        Self::Nurse,
        Self::Physiotherapist,
        Self::Counselor,
        Self::Caretaker,
    ];

    /// Registration endpoint for this role
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Nurse => endpoints::REGISTER_NURSES,
            Self::Physiotherapist => endpoints::REGISTER_PHYSIOTHERAPISTS,
            Self::Counselor => endpoints::REGISTER_COUNSELOR,
            Self::Caretaker => endpoints::REGISTER_CARETAKERS,
        }
    }

    /// Education levels a worker of this role may hold
    #[must_use]
    pub const fn education_levels(self) -> &'static [&'static str] {
        match self {
            Self::Nurse => categories::NURSE_EDUCATION,
            Self::Physiotherapist => categories::PHYSIOTHERAPIST_EDUCATION,
            Self::Counselor => categories::COUNSELOR_EDUCATION,
            Self::Caretaker => categories::CARETAKER_EDUCATION,
        }
    }

    /// Specializations for this role, `None` for caretakers
    #[must_use]
    pub const fn specializations(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Nurse => Some(categories::NURSE_SPECIALIZATIONS),
            Self::Physiotherapist => Some(categories::PHYSIOTHERAPIST_SPECIALIZATIONS),
            Self::Counselor => Some(categories::COUNSELOR_SPECIALIZATIONS),
            Self::Caretaker => None,
        }
    }

    /// Lowercase singular name, as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nurse => "nurse",
            Self::Physiotherapist => "physiotherapist",
            Self::Counselor => "counselor",
            Self::Caretaker => "caretaker",
        }
    }

    /// Capitalized plural used in run summaries
    #[must_use]
    pub const fn plural_label(self) -> &'static str {
        match self {
            Self::Nurse => "Nurses",
            Self::Physiotherapist => "Physiotherapists",
            Self::Counselor => "Counselors",
            Self::Caretaker => "Caretakers",
        }
    }
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schedule placeholder embedded in a new worker; both lists start empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSchedule {
    /// Open slots
    pub available: Vec<serde_json::Value>,
    /// Taken slots
    pub booked: Vec<serde_json::Value>,
}

/// A worker registration body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerRecord {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Years of experience, sampled independently of age
    pub experience: u32,
    /// Highest education level
    pub education: String,
    /// Always empty for seeded workers
    pub profile_picture: String,
    /// Area of practice; caretakers have none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Primary phone, must be unique server-side
    pub phone: String,
    /// Service location
    #[serde(rename = "loc")]
    pub location: Location,
    /// Availability placeholder
    pub schedule: WorkerSchedule,
}

impl ContactPhone for WorkerRecord {
    fn phone(&self) -> &str {
        &self.phone
    }

    fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }
}
