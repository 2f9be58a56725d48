// ABOUTME: User registration record sent to the register/user endpoint
// ABOUTME: Includes the gender enumeration and the preferred worker category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContactPhone, Location, WorkerRole};

/// Gender as accepted by the registration endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
}

/// A user (patient) registration body
///
/// # Examples
///
/// ```rust
/// use dycare_core::models::{Gender, Location, UserRecord, WorkerRole};
///
/// let user = UserRecord {
///     id: None,
///     name: "Priya Sharma".into(),
///     age: 34,
///     location: Location::rounded(19.0596, 72.8295),
///     phone: "9876543210".into(),
///     backup_phone: "9123456780".into(),
///     gender: Gender::Female,
///     preferred_type: WorkerRole::Nurse,
/// };
/// let body = serde_json::to_value(&user).unwrap();
/// assert_eq!(body["prefered_type"], "nurse");
/// assert!(body.get("id").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Client-assigned identity; omitted when the server assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Home location
    pub location: Location,
    /// Primary phone, must be unique server-side
    pub phone: String,
    /// Secondary phone
    pub backup_phone: String,
    /// Gender
    pub gender: Gender,
    /// Requested worker category
    #[serde(rename = "prefered_type")]
    pub preferred_type: WorkerRole,
}

impl ContactPhone for UserRecord {
    fn phone(&self) -> &str {
        &self.phone
    }

    fn set_phone(&mut self, phone: String) {
        self.phone = phone;
    }
}
