// ABOUTME: Wire records for the scheduling API's registration and appointment endpoints
// ABOUTME: Re-exports User, Worker, Appointment and Location types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Records are serialized exactly as the scheduling API expects them, which
//! includes a few irregular field names (`prefered_type`, `loc`, `userID`).
//! The Rust field names are regular; serde attributes carry the wire names.
//!
//! ## Core Models
//!
//! - `UserRecord`: a patient registering with the service
//! - `WorkerRecord`: a nurse, physiotherapist, counselor or caretaker
//! - `AppointmentRecord`: a dated shift linking a user to a worker
//! - `Location`: a rounded latitude/longitude pair

mod appointment;
mod location;
mod user;
mod worker;

pub use appointment::{AppointmentRecord, ScheduleRequest, Shift};
pub use location::Location;
pub use user::{Gender, UserRecord};
pub use worker::{WorkerRecord, WorkerRole, WorkerSchedule};

/// A record carrying a phone number the server requires to be unique.
///
/// On a 409 Conflict the submission client swaps in a freshly generated
/// number and resubmits the same record.
pub trait ContactPhone {
    /// Current primary phone number
    fn phone(&self) -> &str;

    /// Replace the primary phone number
    fn set_phone(&mut self, phone: String);
}
