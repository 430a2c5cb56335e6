use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kwal_models::{ApplicationId, ApplyForm, JobId};
use kwal_views::pages::{JobDetailPage, MyApplicationsPage};
use kwal_views::{StaticSession, ViewError};

use super::{harness, job_json, signed_in};

fn applications_body() -> serde_json::Value {
    json!({
        "data": {
            "applications": [
                {
                    "id": 11,
                    "jobListingId": 1,
                    "status": "submitted",
                    "submittedAt": "2024-05-02T12:00:00Z",
                    "jobListing": { "id": 1, "title": "Job 1" }
                }
            ],
            "total": 1,
            "page": 1,
            "limit": 10
        }
    })
}

#[tokio::test]
async fn test_withdraw_refetches_list_and_toggles_loading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applications/me"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(applications_body())
                .set_delay(Duration::from_millis(100)),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/applications/11"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "id": 11 } })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = MyApplicationsPage::new(&h.ctx);
    page.load().await;
    assert_eq!(page.view().rows.len(), 1);

    let mut rx = page.query().subscribe();
    rx.mark_unchanged();
    let watcher = tokio::spawn(async move {
        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let loading = rx.borrow_and_update().loading;
            seen.push(loading);
            if !loading {
                break;
            }
        }
        seen
    });

    page.withdraw(&ApplicationId::from(11_i64)).await.unwrap();

    assert_eq!(watcher.await.unwrap(), vec![true, false]);
    assert!(!page.mutations().state().loading);
    assert!(!page.view().loading);
}

#[tokio::test]
async fn test_withdraw_failure_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applications/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(applications_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/applications/11"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "message": "Cannot withdraw" })),
        )
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = MyApplicationsPage::new(&h.ctx);
    page.load().await;

    let err = page.withdraw(&ApplicationId::from(11_i64)).await.unwrap_err();
    assert_eq!(err.to_string(), "Cannot withdraw");
    assert_eq!(page.view().error.as_deref(), Some("Cannot withdraw"));

    page.mutations().clear_error();
    assert!(page.mutations().state().error.is_none());
    assert!(page.view().error.is_none());
}

#[tokio::test]
async fn test_empty_applications_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/applications/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = MyApplicationsPage::new(&h.ctx);
    page.load().await;

    let view = page.view();
    assert_eq!(
        view.empty_message,
        Some("No applications yet. Start by browsing jobs.")
    );
    assert!(view.pager.is_none());
}

#[tokio::test]
async fn test_apply_from_detail_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": job_json(1) })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/applications"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 5, "jobListingId": 1, "status": "submitted" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let mut page = JobDetailPage::new(&h.ctx, JobId::from(1_i64));
    page.load().await;
    assert_eq!(page.view().job.unwrap().company, "Acme");

    let bad = ApplyForm {
        resume_url: "not a url".to_string(),
        ..ApplyForm::default()
    };
    assert!(matches!(page.apply(&bad).await, Err(ViewError::Invalid(_))));

    let form = ApplyForm {
        resume_url: "https://cv.example.com/ada.pdf".to_string(),
        cover_letter: "Hello".to_string(),
    };
    let application = page.apply(&form).await.unwrap().unwrap();
    assert_eq!(application.id, ApplicationId::from(5_i64));
    assert_eq!(
        page.view().notice,
        Some("Application submitted successfully")
    );
}

#[tokio::test]
async fn test_apply_signed_out_goes_to_sign_in() {
    let server = MockServer::start().await;
    let h = harness(&server, StaticSession::signed_out());
    let mut page = JobDetailPage::new(&h.ctx, JobId::from(1_i64));

    let result = page.apply(&ApplyForm::default()).await;
    assert!(matches!(result, Err(ViewError::SignedOut)));
    assert_eq!(
        h.navigator.current().as_deref(),
        Some("/sign-in?redirect_url=%2Fjobs%2F1")
    );
}

#[tokio::test]
async fn test_missing_job_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let page = JobDetailPage::new(&h.ctx, JobId::from(99_i64));
    page.load().await;

    let view = page.view();
    assert!(view.not_found);
    assert!(view.job.is_none());
}
