use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kwal_models::{JobFilterField, JobFilters};
use kwal_views::pages::JobBoardPage;
use kwal_views::StaticSession;

use super::{harness, job_json};

#[tokio::test]
async fn test_three_jobs_render_three_cards_without_pager() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "jobs": [job_json(1), job_json(2), job_json(3)],
                "pages": 1,
                "currentPage": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let page = JobBoardPage::with_filters(&h.ctx, JobFilters::default());
    page.load().await;

    let view = page.view();
    assert_eq!(view.cards.len(), 3);
    assert!(view.pager.is_none());
    assert!(view.empty_message.is_none());
    assert!(!view.loading);
    assert_eq!(view.cards[0].salary.as_deref(), Some("$100,000 - $120,000"));
}

#[tokio::test]
async fn test_empty_board_shows_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "jobs": [], "total": 0 } })),
        )
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let page = JobBoardPage::new(&h.ctx);
    assert_eq!(page.filters().limit, 12);
    page.load().await;

    let view = page.view();
    assert!(view.cards.is_empty());
    assert_eq!(
        view.empty_message,
        Some("No jobs found matching your criteria.")
    );
}

#[tokio::test]
async fn test_filter_change_resets_page_and_refetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "jobs": [job_json(1)], "total": 30, "pages": 3, "currentPage": 1 }
        })))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let mut page = JobBoardPage::new(&h.ctx);
    page.load().await;

    assert!(page.next().await);
    assert_eq!(page.filters().page, 2);
    assert!(page.view().pager.is_some());

    assert!(page.set_filter(JobFilterField::JobType, "contract").await.unwrap());
    assert_eq!(page.filters().page, 1);

    // Same value again is the same key.
    assert!(!page.set_filter(JobFilterField::JobType, "contract").await.unwrap());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    let last = requests.last().unwrap().url.query().unwrap_or_default().to_string();
    assert!(last.contains("page=1"));
    assert!(last.contains("jobType=contract"));
}

#[tokio::test]
async fn test_pager_never_leaves_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "jobs": [job_json(1)], "pages": 2, "currentPage": 1 }
        })))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let mut page = JobBoardPage::new(&h.ctx);
    page.load().await;

    assert!(page.pager().previous_disabled());
    assert!(!page.previous().await);
    assert_eq!(page.filters().page, 1);

    assert!(page.go_to_page(9).await);
    assert_eq!(page.filters().page, 2);
    assert!(page.pager().next_disabled());
    assert!(!page.next().await);
}

#[tokio::test]
async fn test_pager_derived_from_total_when_pages_missing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "jobs": [job_json(1), job_json(2)], "total": 50 }
        })))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let mut page = JobBoardPage::new(&h.ctx);
    page.load().await;

    let pager = page.view().pager.expect("pager should be visible");
    assert_eq!(pager.total_pages, 5);
    assert!(!pager.next_disabled());

    assert!(page.next().await);
    assert_eq!(page.filters().page, 2);

    assert!(page.go_to_page(9).await);
    assert_eq!(page.filters().page, 5);
}

#[tokio::test]
async fn test_invalid_filter_value_is_rejected() {
    let server = MockServer::start().await;
    let h = harness(&server, StaticSession::signed_out());
    let mut page = JobBoardPage::new(&h.ctx);

    assert!(page.set_filter(JobFilterField::WorkMode, "moon").await.is_err());
    assert_eq!(page.filters().work_mode, None);
}

#[tokio::test]
async fn test_server_error_surfaces_in_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "error": "Database down" })))
        .mount(&server)
        .await;

    let h = harness(&server, StaticSession::signed_out());
    let page = JobBoardPage::new(&h.ctx);
    page.load().await;

    let view = page.view();
    assert_eq!(view.error.as_deref(), Some("Database down"));
    assert!(view.empty_message.is_none());
}
