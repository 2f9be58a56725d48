// ABOUTME: Appointment record and the schedule/book request body derived from it
// ABOUTME: Shift enumeration covers the three time-of-day slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Time-of-day slot for an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shift {
    /// Morning slot
    Morning,
    /// Afternoon slot
    Afternoon,
    /// Evening slot
    Evening,
}

impl Shift {
    /// All shifts
    pub const ALL: [Self; 3] = [Self::Morning, Self::Afternoon, Self::Evening];
}

/// An appointment between a user and a worker
///
/// Only `date` and `shift` travel in request bodies; the identifiers are sent
/// as headers by the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    /// Local start time, whole hour
    pub date: NaiveDateTime,
    /// Booking user
    #[serde(rename = "userID")]
    pub user_id: String,
    /// Booked worker
    #[serde(rename = "workerID")]
    pub worker_id: String,
    /// Time-of-day slot
    pub shift: Shift,
    /// Confirmed by the worker
    pub status: bool,
    /// Reminder sent
    pub notified: bool,
}

impl AppointmentRecord {
    /// Body shared by the schedule and book requests
    #[must_use]
    pub const fn slot(&self) -> ScheduleRequest {
        ScheduleRequest {
            date: self.date,
            shift: self.shift,
        }
    }
}

/// Body of the `appointments/schedule` and `appointments/book` requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Local start time
    pub date: NaiveDateTime,
    /// Time-of-day slot
    pub shift: Shift,
}
