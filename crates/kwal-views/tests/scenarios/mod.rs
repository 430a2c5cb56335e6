mod applications_tests;
mod employer_tests;
mod gate_tests;
mod job_board_tests;
mod profile_tests;

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use kwal_client::{ApiClient, ClientConfig};
use kwal_views::{AppContext, RecordingNavigator, StaticSession};

pub struct Harness {
    pub ctx: AppContext,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(server: &MockServer, session: StaticSession) -> Harness {
    let client = ApiClient::new(ClientConfig::default().with_base_url(server.uri())).unwrap();
    let navigator = Arc::new(RecordingNavigator::new());
    let ctx = AppContext::new(client, Arc::new(session), navigator.clone());
    Harness { ctx, navigator }
}

pub fn signed_in() -> StaticSession {
    StaticSession::signed_in("test-token").with_email("me@example.com")
}

pub fn job_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Job {id}"),
        "company": "Acme",
        "jobType": "full_time",
        "workMode": "remote",
        "salaryRangeMin": 100000,
        "salaryRangeMax": 120000,
        "status": "active",
        "postedDate": "2024-05-01T09:00:00Z"
    })
}

pub fn user_json(user_type: &str) -> Value {
    json!({
        "id": 42,
        "email": "me@example.com",
        "userType": user_type,
        "profile": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "headline": "Engineer",
            "salaryMin": 90000,
            "isPublic": true
        }
    })
}
