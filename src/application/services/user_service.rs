use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::models::{
        story::Story,
        user::{
            AuthEnvelope, LoginRequest, LoginUser, SignupRequest, SignupUser, TokenRequest,
            UserEnvelope,
        },
    },
    constants::{
        FAVORITES_SEGMENT, LOGIN_SEGMENT, SIGNUP_SEGMENT, TOKEN_QUERY_KEY, USERS_SEGMENT,
    },
    error::AppError,
    session::{
        interface::{FavoriteState, RestoreOutcome, StoredCredentials},
        session::Session,
    },
    transport::http_client::{StoryHttpClient, NO_BODY},
};

/// Account and favorites operations against the story service.
///
/// Mutating calls take the session by `&mut`, so at most one of them can be in
/// flight per session. Local state changes only after the service accepted
/// the call; a failed or dropped call leaves the session as it was.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Registers a new account and returns its session.
    async fn signup(&self, username: &str, password: &str, name: &str)
        -> Result<Session, AppError>;

    async fn login(&self, username: &str, password: &str) -> Result<Session, AppError>;

    /// Re-establishes a session from a stored token. Never fails.
    async fn restore_session(&self, stored: Option<&StoredCredentials>) -> RestoreOutcome;

    async fn add_favorite(&self, session: &mut Session, story: &Story) -> Result<(), AppError>;

    async fn remove_favorite(&self, session: &mut Session, story: &Story)
        -> Result<(), AppError>;

    /// Flips the story's favorite state and returns the new one.
    async fn toggle_favorite(
        &self,
        session: &mut Session,
        story: &Story,
    ) -> Result<FavoriteState, AppError>;
}

pub struct UserServiceImpl<T: StoryHttpClient> {
    client: Arc<T>,
}

impl<T: StoryHttpClient> UserServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    pub fn get_client(&self) -> Arc<T> {
        self.client.clone()
    }

    async fn favorite_call(
        &self,
        method: Method,
        session: &Session,
        story: &Story,
    ) -> Result<(), AppError> {
        if session.token().is_empty() {
            return Err(AppError::AuthRequired);
        }
        let body = TokenRequest {
            token: session.token(),
        };
        self.client
            .execute(
                method,
                &[
                    USERS_SEGMENT,
                    session.username(),
                    FAVORITES_SEGMENT,
                    story.story_id(),
                ],
                &[],
                Some(&body),
            )
            .await
            .map_err(AppError::from_mutation)
    }
}

#[async_trait]
impl<T: StoryHttpClient + 'static> UserService for UserServiceImpl<T> {
    #[instrument(skip(self, password, name))]
    async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<Session, AppError> {
        info!("Registering user");

        let request = SignupRequest {
            user: SignupUser {
                username,
                password,
                name,
            },
        };
        let envelope: AuthEnvelope = self
            .client
            .request(Method::POST, &[SIGNUP_SEGMENT], &[], Some(&request))
            .await
            .map_err(AppError::from_signup)?;

        debug!("User {} registered", envelope.user.username);
        Ok(Session::new(envelope.user, envelope.token))
    }

    #[instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &str) -> Result<Session, AppError> {
        info!("Logging in");

        let request = LoginRequest {
            user: LoginUser { username, password },
        };
        let envelope: AuthEnvelope = self
            .client
            .request(Method::POST, &[LOGIN_SEGMENT], &[], Some(&request))
            .await
            .map_err(AppError::from_login)?;

        debug!(
            "Logged in with {} favorites and {} own stories",
            envelope.user.favorites.len(),
            envelope.user.stories.len()
        );
        Ok(Session::new(envelope.user, envelope.token))
    }

    #[instrument(skip(self, stored))]
    async fn restore_session(&self, stored: Option<&StoredCredentials>) -> RestoreOutcome {
        let Some(stored) = stored else {
            debug!("No stored credentials");
            return RestoreOutcome::NoStoredCredentials;
        };
        info!("Restoring session for {}", stored.username);

        let result: Result<UserEnvelope, _> = self
            .client
            .request(
                Method::GET,
                &[USERS_SEGMENT, stored.username.as_str()],
                &[(TOKEN_QUERY_KEY, stored.token.as_str())],
                NO_BODY,
            )
            .await;

        match result {
            Ok(envelope) => RestoreOutcome::Restored(Session::new(envelope.user, stored.token.clone())),
            Err(e) => {
                let err = AppError::from_mutation(e);
                warn!("Stored credentials rejected, continuing logged out: {}", err);
                RestoreOutcome::Rejected(err)
            }
        }
    }

    #[instrument(skip(self, session, story), fields(story_id = %story.story_id()))]
    async fn add_favorite(&self, session: &mut Session, story: &Story) -> Result<(), AppError> {
        info!("Adding favorite");
        self.favorite_call(Method::POST, session, story).await?;
        session.insert_favorite(story.clone());
        Ok(())
    }

    #[instrument(skip(self, session, story), fields(story_id = %story.story_id()))]
    async fn remove_favorite(
        &self,
        session: &mut Session,
        story: &Story,
    ) -> Result<(), AppError> {
        info!("Removing favorite");
        self.favorite_call(Method::DELETE, session, story).await?;
        let removed = session.remove_favorite(story.story_id());
        debug!("Removed {} local entries", removed);
        Ok(())
    }

    #[instrument(skip(self, session, story), fields(story_id = %story.story_id()))]
    async fn toggle_favorite(
        &self,
        session: &mut Session,
        story: &Story,
    ) -> Result<FavoriteState, AppError> {
        let current = session.favorite_state(story.story_id());
        match current {
            FavoriteState::NotFavorited => self.add_favorite(session, story).await?,
            FavoriteState::Favorited => self.remove_favorite(session, story).await?,
        }
        Ok(current.toggled())
    }
}
