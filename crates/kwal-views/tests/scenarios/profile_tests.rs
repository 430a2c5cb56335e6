use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kwal_models::UserId;
use kwal_views::pages::{ProfilePage, PublicProfile, PublicProfilePage};
use kwal_views::{StaticSession, ViewError};

use super::{harness, signed_in, user_json};

#[tokio::test]
async fn test_negative_salary_is_rejected_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let mut page = ProfilePage::new(&h.ctx);
    page.form_mut().salary_min = "-5".to_string();

    let err = page.submit().await.unwrap_err();
    match &err {
        ViewError::Invalid(errors) => {
            assert_eq!(errors.get("salary_min"), Some("Must be a positive integer"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(err.field_errors().contains("salary_min"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_sends_email_and_reloads() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json("job_seeker") })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/users/me"))
        .and(body_partial_json(json!({
            "email": "me@example.com",
            "firstName": "Ada",
            "userType": "job_seeker",
            "salaryMin": 95000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json("job_seeker") })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let mut page = ProfilePage::new(&h.ctx);
    page.load().await;
    assert_eq!(page.form().first_name, "Ada");

    page.form_mut().salary_min = "95000".to_string();
    page.submit().await.unwrap();

    let view = page.view();
    assert_eq!(view.saved, Some("Profile saved successfully"));
    assert!(!view.save.loading);
    assert_eq!(page.form().salary_min, "90000");
}

#[tokio::test]
async fn test_save_requires_email() {
    let server = MockServer::start().await;
    let h = harness(&server, StaticSession::signed_in("test-token"));
    let mut page = ProfilePage::new(&h.ctx);

    let err = page.submit().await.unwrap_err();
    assert!(matches!(err, ViewError::MissingEmail));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_public_profile_outcomes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json("employer") })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 2 } })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/users/3"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());

    let loaded = PublicProfilePage::new(&h.ctx, UserId::from(1_i64));
    assert_eq!(loaded.view(), PublicProfile::Loading);
    loaded.load().await;
    match loaded.view() {
        PublicProfile::Loaded(card) => {
            assert_eq!(card.name, "Ada Lovelace");
            assert_eq!(card.headline.as_deref(), Some("Engineer"));
        }
        other => panic!("expected a profile, got {other:?}"),
    }

    let empty = PublicProfilePage::new(&h.ctx, UserId::from(2_i64));
    empty.load().await;
    assert_eq!(empty.view(), PublicProfile::NoProfile);
    assert_eq!(
        empty.view().message(),
        Some("This user has not created a public profile yet.")
    );

    let failed = PublicProfilePage::new(&h.ctx, UserId::from(3_i64));
    failed.load().await;
    assert_eq!(failed.view(), PublicProfile::NotFound);
    assert_eq!(
        failed.view().message(),
        Some("Profile not found or failed to load.")
    );
}
