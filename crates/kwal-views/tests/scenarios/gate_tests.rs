use std::cell::Cell;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kwal_views::{EmployerGate, GateState, Rendered, StaticSession};

use super::{harness, signed_in, user_json};

async fn mount_me(server: &MockServer, user_type: &str) {
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json(user_type) })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_job_seeker_is_sent_home_without_rendering() {
    let server = MockServer::start().await;
    mount_me(&server, "job_seeker").await;

    let h = harness(&server, signed_in());
    let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs");
    assert_eq!(gate.check().await, GateState::Denied);
    assert_eq!(h.navigator.current().as_deref(), Some("/"));

    let rendered = Cell::new(false);
    let out = gate.render(|| rendered.set(true));
    assert_eq!(out, Rendered::Nothing);
    assert!(!rendered.get());
}

#[tokio::test]
async fn test_employer_and_dual_role_are_allowed() {
    for user_type in ["employer", "both"] {
        let server = MockServer::start().await;
        mount_me(&server, user_type).await;

        let h = harness(&server, signed_in());
        let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs");
        assert_eq!(gate.check().await, GateState::Allowed);
        assert!(h.navigator.history().is_empty());
        assert_eq!(gate.render(|| "children"), Rendered::Children("children"));
    }
}

#[tokio::test]
async fn test_signed_out_redirects_to_sign_in_with_return_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs/new");
    assert_eq!(gate.check().await, GateState::Checking);
    assert_eq!(
        h.navigator.current().as_deref(),
        Some("/sign-in?redirect_url=%2Fdashboard%2Fjobs%2Fnew")
    );
    assert_eq!(gate.render(|| ()), Rendered::Placeholder);
}

#[tokio::test]
async fn test_waits_for_session_to_load() {
    let server = MockServer::start().await;
    let h = harness(&server, StaticSession::loading());
    let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs");

    assert_eq!(gate.check().await, GateState::Checking);
    assert!(h.navigator.history().is_empty());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_profile_is_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs");
    assert_eq!(gate.check().await, GateState::Denied);
    assert_eq!(h.navigator.current().as_deref(), Some("/"));
}

#[tokio::test]
async fn test_profile_error_is_denied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let gate = EmployerGate::new(&h.ctx, "/dashboard/jobs");
    assert_eq!(gate.check().await, GateState::Denied);
    assert!(gate.ensure_allowed().is_err());
}
