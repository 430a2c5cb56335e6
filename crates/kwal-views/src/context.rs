use std::sync::Arc;

use kwal_client::{ApiClient, ApplicationsService, JobsService, TokenProvider, UsersService};

use crate::session::{Navigator, Session};

/// Everything a page needs, passed in explicitly.
#[derive(Clone)]
pub struct AppContext {
    pub jobs: JobsService,
    pub applications: ApplicationsService,
    pub users: UsersService,
    pub session: Arc<dyn Session>,
    pub navigator: Arc<dyn Navigator>,
}

impl AppContext {
    /// Wire the services to `session`, which also supplies request tokens.
    pub fn new<S>(client: ApiClient, session: Arc<S>, navigator: Arc<dyn Navigator>) -> Self
    where
        S: Session + 'static,
    {
        let auth: Arc<dyn TokenProvider> = session.clone();
        Self {
            jobs: JobsService::new(client.clone(), Arc::clone(&auth)),
            applications: ApplicationsService::new(client.clone(), Arc::clone(&auth)),
            users: UsersService::new(client, auth),
            session,
            navigator,
        }
    }
}
