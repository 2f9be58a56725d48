// ABOUTME: Integration tests for the submission client against a mock scheduling API
// ABOUTME: Covers phone conflict retries, rejection, success policies, transport failure and headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use dycare_core::constants::{endpoints, headers};
use dycare_core::models::WorkerRole;
use dycare_seeder::client::{ResponseBody, SubmitOutcome, SuccessPolicy};
use dycare_seeder::generator::AgeRange;
use reqwest::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn phones_sent(requests: &[wiremock::Request]) -> Vec<String> {
    requests
        .iter()
        .map(|r| {
            let body: Value = r.body_json().unwrap();
            body["phone"].as_str().unwrap().to_owned()
        })
        .collect()
}

#[tokio::test]
async fn test_persistent_conflict_gives_up_after_three_attempts() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/user"))
        .respond_with(ResponseTemplate::new(409))
        .expect(3)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let mut generator = common::seeded_generator(7);
    let mut user = generator.user(AgeRange::REGISTRATION);
    let original_phone = user.phone.clone();

    let outcome = client
        .submit(endpoints::REGISTER_USER, &mut user, &mut generator)
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::ConflictExhausted { attempts: 3 });
    assert!(!outcome.is_success());

    let sent = phones_sent(&server.received_requests().await.unwrap());
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], original_phone);
    assert_ne!(sent[1], sent[0]);
    assert_ne!(sent[2], sent[1]);
    assert_eq!(user.phone, sent[2]);
}

#[tokio::test]
async fn test_conflict_then_success_resubmits_with_new_phone() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/nurses"))
        .respond_with(ResponseTemplate::new(409))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/register/nurses"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "n-1"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let mut generator = common::seeded_generator(11);
    let mut nurse = generator.worker(WorkerRole::Nurse);

    let outcome = client
        .submit(WorkerRole::Nurse.endpoint(), &mut nurse, &mut generator)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::Accepted {
            status,
            attempts,
            body,
        } => {
            assert_eq!(status, StatusCode::CREATED);
            assert_eq!(attempts, 2);
            assert_eq!(body.json(), Some(&json!({"id": "n-1"})));
        }
        other => panic!("expected acceptance, got {other:?}"),
    }

    let sent = phones_sent(&server.received_requests().await.unwrap());
    assert_eq!(sent.len(), 2);
    assert_ne!(sent[0], sent[1]);
}

#[tokio::test]
async fn test_server_error_is_final() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/caretakers"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let mut generator = common::seeded_generator(3);
    let mut caretaker = generator.worker(WorkerRole::Caretaker);
    let phone = caretaker.phone.clone();

    let outcome = client
        .submit(endpoints::REGISTER_CARETAKERS, &mut caretaker, &mut generator)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            attempts: 1,
            body: ResponseBody::Text("database unavailable".to_owned()),
        }
    );
    assert_eq!(caretaker.phone, phone);
}

#[tokio::test]
async fn test_created_status_depends_on_success_policy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/user"))
        .respond_with(ResponseTemplate::new(201))
        .expect(2)
        .mount(&server)
        .await;

    let mut generator = common::seeded_generator(5);

    let strict = common::client_for(&server.uri(), SuccessPolicy::OkOnly);
    let mut user = generator.user(AgeRange::REGISTRATION);
    let outcome = strict
        .submit(endpoints::REGISTER_USER, &mut user, &mut generator)
        .await
        .unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected { attempts: 1, .. }));
    assert_eq!(outcome.status(), Some(StatusCode::CREATED));

    let lenient = common::client_for(&server.uri(), SuccessPolicy::OkOrCreated);
    let mut user = generator.user(AgeRange::REGISTRATION);
    let outcome = lenient
        .submit(endpoints::REGISTER_USER, &mut user, &mut generator)
        .await
        .unwrap();
    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_transport_failure_is_bounded() {
    common::init_test_logging();
    let client = common::client_for(&common::closed_port_url(), SuccessPolicy::default());
    let mut generator = common::seeded_generator(9);
    let mut user = generator.user(AgeRange::REGISTRATION);

    let outcome = client
        .submit(endpoints::REGISTER_USER, &mut user, &mut generator)
        .await
        .unwrap();

    match outcome {
        SubmitOutcome::TransportFailed { attempts, error } => {
            assert_eq!(attempts, 3);
            assert!(!error.is_empty());
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_worker_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/register/counselor"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/register/caretakers"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let mut generator = common::seeded_generator(21);
    let mut counselor = generator.worker(WorkerRole::Counselor);
    let mut caretaker = generator.worker(WorkerRole::Caretaker);
    client
        .submit(WorkerRole::Counselor.endpoint(), &mut counselor, &mut generator)
        .await
        .unwrap();
    client
        .submit(WorkerRole::Caretaker.endpoint(), &mut caretaker, &mut generator)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let bodies: Vec<Value> = requests.iter().map(|r| r.body_json().unwrap()).collect();

    let counselor_body = &bodies[0];
    assert!(counselor_body["specialization"].is_string());
    assert!(counselor_body["loc"]["latitude"].is_number());
    assert_eq!(counselor_body["profile_picture"], "");
    assert_eq!(counselor_body["schedule"], json!({"available": [], "booked": []}));

    let caretaker_body = bodies[1].as_object().unwrap();
    assert!(!caretaker_body.contains_key("specialization"));
    assert!(!caretaker_body.contains_key("location"));
}

#[tokio::test]
async fn test_post_once_sends_identity_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/appointments/book"))
        .and(header(headers::WORKER_ID, "worker-1"))
        .and(header(headers::USER_ID, "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let response = client
        .post_once(
            endpoints::APPOINTMENTS_BOOK,
            &json!({"shift": "MORNING"}),
            &[(headers::WORKER_ID, "worker-1"), (headers::USER_ID, "user-1")],
        )
        .await
        .unwrap();

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.json(), Some(&json!({"ok": true})));
}

#[tokio::test]
async fn test_response_body_logged_as_sent() {
    let raw = r#"{"status":"created","id":"u-9","age":30}"#;
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/appointments/schedule"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(raw, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::mock_client(&server);
    let response = client
        .post_once(endpoints::APPOINTMENTS_SCHEDULE, &json!({}), &[])
        .await
        .unwrap();

    assert_eq!(response.body.raw(), raw);
    assert_eq!(response.body.preview(), raw);
    assert_eq!(response.body.json().unwrap()["id"], "u-9");
}

#[tokio::test]
async fn test_post_once_reports_transport_error() {
    let client = common::client_for(&common::closed_port_url(), SuccessPolicy::default());
    let result = client
        .post_once(endpoints::APPOINTMENTS_SCHEDULE, &json!({}), &[])
        .await;
    assert!(result.is_err());
}
