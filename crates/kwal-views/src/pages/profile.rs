use std::sync::Arc;

use kwal_client::UsersService;
use kwal_models::{ProfileForm, User, UserId};

use crate::cards::ProfileCard;
use crate::context::AppContext;
use crate::error::{ViewError, ViewResult};
use crate::hooks::{me_query, user_query};
use crate::mutation::{Mutation, MutationState};
use crate::query::Query;
use crate::session::Session;

pub const SAVED_MESSAGE: &str = "Profile saved successfully";
pub const PROFILE_NOT_FOUND_MESSAGE: &str = "Profile not found or failed to load.";
pub const NO_PUBLIC_PROFILE_MESSAGE: &str = "This user has not created a public profile yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub saved: Option<&'static str>,
    pub save: MutationState,
}

/// The signed-in user's profile editor at `/dashboard/profile`.
pub struct ProfilePage {
    users: UsersService,
    session: Arc<dyn Session>,
    query: Query<(), User>,
    mutation: Mutation,
    form: ProfileForm,
    saved: Option<&'static str>,
}

impl ProfilePage {
    pub fn new(ctx: &AppContext) -> Self {
        Self {
            users: ctx.users.clone(),
            session: Arc::clone(&ctx.session),
            query: me_query(ctx.users.clone()),
            mutation: Mutation::new("profile"),
            form: ProfileForm::default(),
            saved: None,
        }
    }

    pub fn query(&self) -> &Query<(), User> {
        &self.query
    }

    /// Load the account and prefill the form from it.
    pub async fn load(&mut self) {
        self.query.mount(()).await;
        self.prefill();
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProfileForm {
        self.saved = None;
        &mut self.form
    }

    /// Validate, save, then reload.
    ///
    /// Invalid input is reported without touching the network.
    pub async fn submit(&mut self) -> ViewResult<()> {
        self.saved = None;
        let payload = self.form.validate()?;
        let email = self
            .session
            .email()
            .filter(|e| !e.trim().is_empty())
            .ok_or(ViewError::MissingEmail)?;

        self.mutation
            .run(self.users.update_me(&payload.with_email(email)))
            .await?;
        self.saved = Some(SAVED_MESSAGE);

        self.query.refetch().await;
        self.prefill();
        Ok(())
    }

    pub fn view(&self) -> ProfileView {
        self.query.with_state(|state| ProfileView {
            user: state.data.clone(),
            loading: state.loading,
            error: state.error.clone(),
            saved: self.saved,
            save: self.mutation.snapshot(),
        })
    }

    fn prefill(&mut self) {
        if let Some(form) = self
            .query
            .with_state(|s| s.data.as_ref().map(ProfileForm::from_user))
        {
            self.form = form;
        }
    }
}

/// Outcome of loading someone's public profile.
#[derive(Debug, Clone, PartialEq)]
pub enum PublicProfile {
    Loading,
    Loaded(Box<ProfileCard>),
    NoProfile,
    NotFound,
}

impl PublicProfile {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoProfile => Some(NO_PUBLIC_PROFILE_MESSAGE),
            Self::NotFound => Some(PROFILE_NOT_FOUND_MESSAGE),
            _ => None,
        }
    }
}

/// Another user's profile at `/profiles/{id}`.
pub struct PublicProfilePage {
    id: UserId,
    query: Query<UserId, User>,
}

impl PublicProfilePage {
    pub fn new(ctx: &AppContext, id: UserId) -> Self {
        Self {
            id,
            query: user_query(ctx.users.clone()),
        }
    }

    pub async fn load(&self) {
        self.query.mount(self.id.clone()).await;
    }

    pub fn view(&self) -> PublicProfile {
        if self.query.key().is_none() {
            return PublicProfile::Loading;
        }
        self.query.with_state(|state| {
            if state.loading {
                return PublicProfile::Loading;
            }
            if state.error.is_some() {
                return PublicProfile::NotFound;
            }
            match state.data.as_ref() {
                Some(user) => match user.profile.as_ref() {
                    Some(profile) => PublicProfile::Loaded(Box::new(ProfileCard::new(user, profile))),
                    None => PublicProfile::NoProfile,
                },
                None => PublicProfile::NoProfile,
            }
        })
    }
}
