// ABOUTME: HTTP submission client that posts generated records to the scheduling API
// ABOUTME: Retries 409 conflicts with a fresh phone number and retries transport errors, bounded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Submission Client
//!
//! `submit` sends one record and classifies what happened:
//!
//! - **409 Conflict**: the phone number is already taken. The record gets a
//!   new phone from the generator and is resubmitted immediately, unless the
//!   attempt budget is spent.
//! - **Transport error**: the request never produced a response. The client
//!   sleeps for the configured backoff and resubmits.
//! - **Any other status**: final. Accepted if the success policy allows it,
//!   rejected otherwise. Rejections are not retried.
//!
//! Both retry paths share one attempt budget (`RetryPolicy::max_attempts`).

use std::time::Duration;

use dycare_core::constants::defaults;
use dycare_core::errors::SeedResult;
use dycare_core::models::ContactPhone;
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};
use url::Url;

use crate::config::environment::ensure_trailing_slash;
use crate::config::SeederConfig;
use crate::generator::RecordGenerator;

/// Which HTTP statuses count as a successful registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessPolicy {
    /// Only 200 OK
    OkOnly,
    /// 200 OK or 201 Created
    #[default]
    OkOrCreated,
}

impl SuccessPolicy {
    /// Whether `status` counts as success under this policy
    #[must_use]
    pub fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::OkOnly => status == StatusCode::OK,
            Self::OkOrCreated => status == StatusCode::OK || status == StatusCode::CREATED,
        }
    }
}

/// Bounds for resubmitting a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total requests allowed per record, first attempt included
    pub max_attempts: u32,
    /// Pause before resubmitting after a transport error
    pub transport_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: defaults::MAX_ATTEMPTS,
            transport_backoff: Duration::from_millis(defaults::TRANSPORT_BACKOFF_MS),
        }
    }
}

/// Response body, decoded as JSON when possible
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// No body
    Empty,
    /// Body parsed as JSON
    Json {
        /// Decoded value
        value: Value,
        /// Text as the server sent it
        raw: String,
    },
    /// Body that is not JSON
    Text(String),
}

impl ResponseBody {
    async fn read(response: Response) -> Self {
        match response.text().await {
            Ok(text) if text.is_empty() => Self::Empty,
            Ok(text) => match serde_json::from_str(&text) {
                Ok(value) => Self::Json { value, raw: text },
                Err(_) => Self::Text(text),
            },
            Err(e) => {
                debug!("Failed to read response body: {e}");
                Self::Empty
            }
        }
    }

    /// Decoded JSON, if the body was JSON
    #[must_use]
    pub const fn json(&self) -> Option<&Value> {
        match self {
            Self::Json { value, .. } => Some(value),
            Self::Empty | Self::Text(_) => None,
        }
    }

    /// Body text exactly as received
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::Json { raw, .. } | Self::Text(raw) => raw,
        }
    }

    /// Leading characters of the raw body, for logging
    #[must_use]
    pub fn preview(&self) -> String {
        self.raw().chars().take(defaults::LOGGED_BODY_CHARS).collect()
    }
}

/// Result of submitting one record
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the record
    Accepted {
        /// Final status
        status: StatusCode,
        /// Requests sent
        attempts: u32,
        /// Response body
        body: ResponseBody,
    },
    /// The server answered with a non-success, non-conflict status
    Rejected {
        /// Final status
        status: StatusCode,
        /// Requests sent
        attempts: u32,
        /// Response body
        body: ResponseBody,
    },
    /// Every attempt ended in 409 Conflict
    ConflictExhausted {
        /// Requests sent
        attempts: u32,
    },
    /// The last attempt failed before a response arrived
    TransportFailed {
        /// Requests sent
        attempts: u32,
        /// Transport error message
        error: String,
    },
}

impl SubmitOutcome {
    /// Whether the record was accepted
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Number of requests sent for this record
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Accepted { attempts, .. }
            | Self::Rejected { attempts, .. }
            | Self::ConflictExhausted { attempts }
            | Self::TransportFailed { attempts, .. } => *attempts,
        }
    }

    /// Final HTTP status, if a non-conflict response arrived
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Accepted { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::ConflictExhausted { .. } | Self::TransportFailed { .. } => None,
        }
    }
}

/// A single response from `post_once`
#[derive(Debug, Clone, PartialEq)]
pub struct PostedResponse {
    /// Status code
    pub status: StatusCode,
    /// Response body
    pub body: ResponseBody,
}

/// Client for the scheduling API's POST endpoints
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: Client,
    base_url: Url,
    retry: RetryPolicy,
    success: SuccessPolicy,
}

impl SubmissionClient {
    /// Create a client rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(
        base_url: Url,
        timeout: Duration,
        retry: RetryPolicy,
        success: SuccessPolicy,
    ) -> SeedResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("dycare-seeder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: ensure_trailing_slash(base_url),
            retry,
            success,
        })
    }

    /// Create a client from the loaded seeder configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn from_config(config: &SeederConfig) -> SeedResult<Self> {
        Self::new(
            config.base_url.clone(),
            config.http_timeout,
            config.retry,
            config.success_policy,
        )
    }

    /// Absolute URL for `endpoint`, joined with exactly one slash
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid
    pub fn endpoint_url(&self, endpoint: &str) -> SeedResult<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Submit `record` to `endpoint`, resolving phone conflicts and transport errors
    ///
    /// On 409 the record's phone is replaced in place, so after the call the
    /// record holds the phone number of the last attempt.
    ///
    /// # Errors
    ///
    /// Returns an error only if `endpoint` cannot be resolved to a URL.
    /// Every HTTP-level failure is reported through `SubmitOutcome`.
    pub async fn submit<R>(
        &self,
        endpoint: &str,
        record: &mut R,
        generator: &mut RecordGenerator,
    ) -> SeedResult<SubmitOutcome>
    where
        R: Serialize + ContactPhone,
    {
        let url = self.endpoint_url(endpoint)?;
        let max_attempts = self.retry.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            debug!(endpoint, attempt, max_attempts, "Posting record");

            let response = match self.http.post(url.clone()).json(&*record).send().await {
                Ok(response) => response,
                Err(e) => {
                    if attempt == max_attempts {
                        error!("Failed after {attempt} attempts for {endpoint}: {e}");
                        return Ok(SubmitOutcome::TransportFailed {
                            attempts: attempt,
                            error: e.to_string(),
                        });
                    }
                    warn!(
                        "Transport error on {endpoint} (attempt {attempt}/{max_attempts}): {e}"
                    );
                    tokio::time::sleep(self.retry.transport_backoff).await;
                    continue;
                }
            };

            let status = response.status();
            let body = ResponseBody::read(response).await;
            info!(
                "Response for {endpoint}: Status {}, Body: {}",
                status.as_u16(),
                body.preview()
            );

            if status == StatusCode::CONFLICT {
                if attempt == max_attempts {
                    break;
                }
                let previous = record.phone().to_owned();
                record.set_phone(generator.phone());
                warn!(
                    endpoint,
                    attempt,
                    previous_phone = %previous,
                    next_phone = %record.phone(),
                    "Phone number already registered, regenerating"
                );
                continue;
            }

            if self.success.accepts(status) {
                return Ok(SubmitOutcome::Accepted {
                    status,
                    attempts: attempt,
                    body,
                });
            }

            error!(
                endpoint,
                status = status.as_u16(),
                "Submission rejected: {}",
                body.preview()
            );
            return Ok(SubmitOutcome::Rejected {
                status,
                attempts: attempt,
                body,
            });
        }

        error!(endpoint, max_attempts, "Phone conflicts on every attempt, giving up");
        Ok(SubmitOutcome::ConflictExhausted {
            attempts: max_attempts,
        })
    }

    /// Send one POST with extra identity headers; no retries
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be resolved or no response arrives
    pub async fn post_once<B>(
        &self,
        endpoint: &str,
        body: &B,
        headers: &[(&str, &str)],
    ) -> SeedResult<PostedResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(endpoint)?;
        let mut request = self.http.post(url).json(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = ResponseBody::read(response).await;
        info!(
            "Response for {endpoint}: Status {}, Body: {}",
            status.as_u16(),
            body.preview()
        );

        Ok(PostedResponse { status, body })
    }
}
