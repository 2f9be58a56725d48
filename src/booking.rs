// ABOUTME: Two-step appointment booking: reserve a worker's slot, then book it for a user
// ABOUTME: The book step only runs after the schedule step returned 200 OK
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Appointment Booking Flow
//!
//! 1. `POST appointments/schedule` with `{date, shift}` and the worker's id in
//!    the `sessionID` header.
//! 2. `POST appointments/book` with the same body and the `workerID` and
//!    `userID` headers.
//!
//! The two requests are not transactional. If step 2 fails after step 1
//! succeeded, the worker's schedule keeps a reserved slot with no booking
//! behind it. The server offers no endpoint to release the slot, so the flow
//! reports it as a dangling schedule instead of rolling back.

use dycare_core::constants::{endpoints, headers};
use dycare_core::models::AppointmentRecord;
use reqwest::StatusCode;
use tracing::{error, info, warn};

use crate::client::{ResponseBody, SubmissionClient};

/// How a booking attempt ended
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    /// Both steps returned 200
    Booked,
    /// The schedule step returned a non-200 status; booking was not attempted
    ScheduleRejected {
        /// Schedule status
        status: StatusCode,
        /// Schedule response body
        body: ResponseBody,
    },
    /// The schedule request got no response; booking was not attempted
    ScheduleFailed {
        /// Transport error message
        error: String,
    },
    /// The slot was reserved but the book step returned a non-200 status
    BookingRejected {
        /// Book status
        status: StatusCode,
        /// Book response body
        body: ResponseBody,
    },
    /// The slot was reserved but the book request got no response
    BookingFailed {
        /// Transport error message
        error: String,
    },
}

impl BookingOutcome {
    /// Whether the appointment is fully booked
    #[must_use]
    pub const fn is_booked(&self) -> bool {
        matches!(self, Self::Booked)
    }

    /// Whether a reserved slot was left on the worker without a booking
    #[must_use]
    pub const fn schedule_left_dangling(&self) -> bool {
        matches!(
            self,
            Self::BookingRejected { .. } | Self::BookingFailed { .. }
        )
    }
}

/// Runs the schedule-then-book sequence through a submission client
pub struct AppointmentBooker<'a> {
    client: &'a SubmissionClient,
}

impl<'a> AppointmentBooker<'a> {
    /// Booker that sends its requests through `client`
    #[must_use]
    pub const fn new(client: &'a SubmissionClient) -> Self {
        Self { client }
    }

    /// Reserve the appointment's slot on its worker, then book it for `user_id`
    pub async fn book(&self, user_id: &str, appointment: &AppointmentRecord) -> BookingOutcome {
        let slot = appointment.slot();
        let worker_id = appointment.worker_id.as_str();

        info!(
            worker_id,
            date = %slot.date,
            shift = ?slot.shift,
            "Scheduling appointment"
        );
        let schedule = self
            .client
            .post_once(
                endpoints::APPOINTMENTS_SCHEDULE,
                &slot,
                &[(headers::SESSION_ID, worker_id)],
            )
            .await;

        match schedule {
            Err(e) => {
                error!("Error scheduling appointment: {e}");
                return BookingOutcome::ScheduleFailed {
                    error: e.to_string(),
                };
            }
            Ok(response) if response.status != StatusCode::OK => {
                error!(
                    "Failed to schedule appointment: {} {}",
                    response.status.as_u16(),
                    response.body.preview()
                );
                return BookingOutcome::ScheduleRejected {
                    status: response.status,
                    body: response.body,
                };
            }
            Ok(_) => {}
        }

        info!(worker_id, user_id, "Booking appointment");
        let booking = self
            .client
            .post_once(
                endpoints::APPOINTMENTS_BOOK,
                &slot,
                &[(headers::WORKER_ID, worker_id), (headers::USER_ID, user_id)],
            )
            .await;

        let outcome = match booking {
            Ok(response) if response.status == StatusCode::OK => {
                info!("Appointment booked successfully for user {user_id}");
                return BookingOutcome::Booked;
            }
            Ok(response) => {
                error!(
                    "Failed to book appointment: {} {}",
                    response.status.as_u16(),
                    response.body.preview()
                );
                BookingOutcome::BookingRejected {
                    status: response.status,
                    body: response.body,
                }
            }
            Err(e) => {
                error!("Error booking appointment: {e}");
                BookingOutcome::BookingFailed {
                    error: e.to_string(),
                }
            }
        };

        warn!(
            worker_id,
            date = %slot.date,
            shift = ?slot.shift,
            "Slot reserved on worker schedule without a booking"
        );
        outcome
    }
}
