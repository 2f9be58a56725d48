// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, request headers, generation ranges and category tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Category tables (education levels,
//! specializations) and geography (localities, name pools) live in their own
//! files; the small groups are defined inline below.

/// Education levels and specializations per worker role
pub mod categories;
/// Mumbai localities and name pools used by the generator
pub mod geography;

/// API endpoint paths, relative to the configured base URL
pub mod endpoints {
    /// User registration
    pub const REGISTER_USER: &str = "register/user";
    /// Nurse registration
    pub const REGISTER_NURSES: &str = "register/nurses";
    /// Physiotherapist registration
    pub const REGISTER_PHYSIOTHERAPISTS: &str = "register/physiotherapists";
    /// Counselor registration (singular on the server)
    pub const REGISTER_COUNSELOR: &str = "register/counselor";
    /// Caretaker registration
    pub const REGISTER_CARETAKERS: &str = "register/caretakers";
    /// Reserve a date and shift on a worker's schedule
    pub const APPOINTMENTS_SCHEDULE: &str = "appointments/schedule";
    /// Book a reserved slot for a user
    pub const APPOINTMENTS_BOOK: &str = "appointments/book";
}

/// Identity headers understood by the appointment endpoints
pub mod headers {
    /// Worker identity for the schedule step
    pub const SESSION_ID: &str = "sessionID";
    /// Worker identity for the book step
    pub const WORKER_ID: &str = "workerID";
    /// User identity for the book step
    pub const USER_ID: &str = "userID";
}

/// Inclusive bounds for sampled numeric fields
pub mod ranges {
    /// User age for registration seeding
    pub const USER_AGE: (u32, u32) = (18, 80);
    /// User age for appointment seeding
    pub const APPOINTMENT_USER_AGE: (u32, u32) = (25, 80);
    /// Worker age
    pub const WORKER_AGE: (u32, u32) = (25, 60);
    /// Worker years of experience (independent of age)
    pub const WORKER_EXPERIENCE: (u32, u32) = (1, 30);
    /// Days ahead of now an appointment may fall on
    pub const APPOINTMENT_DAYS_AHEAD: (i64, i64) = (1, 30);
    /// Hour of day an appointment may start at
    pub const APPOINTMENT_HOUR: (u32, u32) = (8, 17);
    /// Offset applied to each coordinate of a locality base point
    pub const LOCALITY_JITTER_DEGREES: f64 = 0.01;
    /// Decimal places kept on generated coordinates
    pub const COORDINATE_DECIMALS: i32 = 6;
}

/// Phone number generation limits
pub mod phone {
    /// Default digit count
    pub const DEFAULT_DIGITS: u32 = 10;
    /// Shortest supported phone number
    pub const MIN_DIGITS: u32 = 7;
    /// Longest supported phone number (stays within `u64`)
    pub const MAX_DIGITS: u32 = 15;
}

/// Defaults for a seeding run
pub mod defaults {
    /// Base URL of a locally running scheduling API
    pub const BASE_URL: &str = "http://localhost:3001";
    /// Users registered per run
    pub const USERS: u32 = 100;
    /// Workers registered per role per run
    pub const WORKERS_PER_ROLE: u32 = 10;
    /// Users created by the appointment seeder
    pub const APPOINTMENT_USERS: u32 = 10;
    /// Pause between registration requests
    pub const REQUEST_DELAY_MS: u64 = 500;
    /// Pause between appointment iterations
    pub const APPOINTMENT_DELAY_MS: u64 = 1000;
    /// Submission attempts per record
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Pause before retrying after a transport error
    pub const TRANSPORT_BACKOFF_MS: u64 = 1000;
    /// HTTP request timeout
    pub const HTTP_TIMEOUT_SECS: u64 = 30;
    /// Characters of a response body kept in logs
    pub const LOGGED_BODY_CHARS: usize = 200;
}
