use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kwal_models::{ApplicationId, ApplicationStatus, JobId};
use kwal_views::pages::{EmployerJobsPage, JobApplicantsPage, JobEditorPage};
use kwal_views::{GateState, Rendered, ViewError};

use super::{harness, job_json, signed_in, user_json};

async fn mount_me(server: &MockServer, user_type: &str) {
    Mock::given(method("GET"))
        .and(path("/api/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user_json(user_type) })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_close_job_refetches_my_jobs() {
    let server = MockServer::start().await;
    mount_me(&server, "employer").await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/employer/my-jobs"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "jobs": [job_json(1), job_json(2)], "total": 2, "pages": 1 }
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/jobs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "status": "closed" } })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = EmployerJobsPage::new(&h.ctx);
    assert_eq!(page.open().await, GateState::Allowed);

    let view = page.view().children().unwrap();
    assert_eq!(view.cards.len(), 2);
    assert!(view.pager.is_none());

    page.close_job(&JobId::from(1_i64)).await.unwrap();
}

#[tokio::test]
async fn test_job_seeker_never_sees_employer_jobs() {
    let server = MockServer::start().await;
    mount_me(&server, "job_seeker").await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/employer/my-jobs"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = EmployerJobsPage::new(&h.ctx);
    assert_eq!(page.open().await, GateState::Denied);
    assert_eq!(page.view(), Rendered::Nothing);
    assert_eq!(h.navigator.current().as_deref(), Some("/"));
    assert!(matches!(
        page.close_job(&JobId::from(1_i64)).await,
        Err(ViewError::Forbidden)
    ));
}

#[tokio::test]
async fn test_applicants_sorted_newest_first_and_status_update() {
    let server = MockServer::start().await;
    mount_me(&server, "both").await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/7/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": 1, "status": "submitted", "submittedAt": "2024-01-01T00:00:00Z",
                  "applicant": { "id": 10, "email": "old@example.com" } },
                { "id": 2, "status": "viewed", "submittedAt": "2024-03-01T00:00:00Z",
                  "applicant": { "id": 11, "email": "new@example.com" } }
            ]
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/applications/1/status"))
        .and(body_json(json!({ "status": "shortlisted" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 1, "status": "shortlisted" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let page = JobApplicantsPage::new(&h.ctx, JobId::from(7_i64));
    assert_eq!(page.open().await, GateState::Allowed);

    let view = page.view().children().unwrap();
    let order: Vec<&str> = view.rows.iter().map(|r| r.applicant.as_str()).collect();
    assert_eq!(order, vec!["new@example.com", "old@example.com"]);

    page.update_status(&ApplicationId::from(1_i64), ApplicationStatus::Shortlisted)
        .await
        .unwrap();
    assert!(!page.view().children().unwrap().updating);
}

#[tokio::test]
async fn test_create_job_validates_then_posts_and_navigates() {
    let server = MockServer::start().await;
    mount_me(&server, "employer").await;
    Mock::given(method("POST"))
        .and(path("/api/jobs"))
        .and(body_partial_json(json!({
            "title": "Rust Engineer",
            "jobType": "full_time",
            "techStack": ["rust", "tokio"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "data": job_json(9) })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let mut page = JobEditorPage::create(&h.ctx);
    assert_eq!(page.open().await, GateState::Allowed);

    page.form_mut().title = "Ru".to_string();
    let err = page.submit().await.unwrap_err();
    assert!(err.field_errors().contains("title"));
    assert!(h.navigator.history().is_empty());

    let form = page.form_mut();
    form.title = "Rust Engineer".to_string();
    form.description = "Build fast services in Rust.".to_string();
    form.requirements = "Three years of systems work.".to_string();
    form.tech_stack = "rust, tokio".to_string();

    let saved = page.submit().await.unwrap().unwrap();
    assert_eq!(saved.id, JobId::from(9_i64));
    assert_eq!(h.navigator.current().as_deref(), Some("/dashboard/jobs"));
}

#[tokio::test]
async fn test_edit_job_prefills_and_puts() {
    let server = MockServer::start().await;
    mount_me(&server, "employer").await;
    Mock::given(method("GET"))
        .and(path("/api/jobs/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 3,
                "title": "Platform Engineer",
                "description": "Keep the platform running.",
                "requirements": "Kubernetes and Rust experience.",
                "jobType": "contract",
                "workMode": "hybrid",
                "experienceLevel": "senior",
                "status": "active"
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/jobs/3"))
        .and(body_partial_json(json!({ "title": "Platform Engineer", "jobType": "contract" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": job_json(3) })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, signed_in());
    let mut page = JobEditorPage::edit(&h.ctx, JobId::from(3_i64));
    assert!(page.is_editing());
    assert_eq!(page.open().await, GateState::Allowed);
    assert_eq!(page.form().title, "Platform Engineer");

    page.submit().await.unwrap();
    assert_eq!(h.navigator.current().as_deref(), Some("/dashboard/jobs"));
}
