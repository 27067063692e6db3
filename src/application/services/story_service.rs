use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::models::{
        story::{Story, StoryDraft, StoryList},
        user::{NewStoryRequest, StoriesEnvelope, StoryEnvelope},
    },
    constants::STORIES_SEGMENT,
    error::AppError,
    session::session::Session,
    transport::http_client::{StoryHttpClient, NO_BODY},
};

/// Catalog operations against the story service.
#[async_trait]
pub trait StoryService: Send + Sync {
    /// Fetches every story; no credentials needed.
    async fn fetch_all(&self) -> Result<StoryList, AppError>;

    /// Posts a draft as `session` and records the new story in both the
    /// catalog and the session's own stories.
    async fn create(
        &self,
        catalog: &mut StoryList,
        session: &mut Session,
        draft: &StoryDraft,
    ) -> Result<Story, AppError>;
}

pub struct StoryServiceImpl<T: StoryHttpClient> {
    client: Arc<T>,
}

impl<T: StoryHttpClient> StoryServiceImpl<T> {
    pub fn new(client: Arc<T>) -> Self {
        Self { client }
    }

    pub fn get_client(&self) -> Arc<T> {
        self.client.clone()
    }
}

#[async_trait]
impl<T: StoryHttpClient + 'static> StoryService for StoryServiceImpl<T> {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<StoryList, AppError> {
        info!("Fetching all stories");

        let envelope: StoriesEnvelope = self
            .client
            .request(Method::GET, &[STORIES_SEGMENT], &[], NO_BODY)
            .await?;

        debug!("Fetched {} stories", envelope.stories.len());
        Ok(StoryList::new(envelope.stories))
    }

    #[instrument(skip(self, catalog, session, draft), fields(username = %session.username()))]
    async fn create(
        &self,
        catalog: &mut StoryList,
        session: &mut Session,
        draft: &StoryDraft,
    ) -> Result<Story, AppError> {
        if session.token().is_empty() {
            return Err(AppError::AuthRequired);
        }
        info!("Submitting story {:?}", draft.title);

        let request = NewStoryRequest {
            token: session.token(),
            story: draft,
        };
        let envelope: StoryEnvelope = self
            .client
            .request(Method::POST, &[STORIES_SEGMENT], &[], Some(&request))
            .await
            .map_err(AppError::from_mutation)?;

        debug!("Story created with id {}", envelope.story.story_id());
        Ok(catalog.insert_created(session, envelope.story))
    }
}
