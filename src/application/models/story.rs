/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 14/10/26
 ******************************************************************************/
use crate::error::AppError;
use crate::session::session::Session;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// A single posted story, as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    #[serde(rename = "storyId")]
    story_id: String,
    title: String,
    author: String,
    url: String,
    username: String,
    #[serde(rename = "createdAt")]
    created_at: String,
}

impl Story {
    pub fn new(
        story_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            story_id: story_id.into(),
            title: title.into(),
            author: author.into(),
            url: url.into(),
            username: username.into(),
            created_at: created_at.into(),
        }
    }

    pub fn story_id(&self) -> &str {
        &self.story_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Server-assigned timestamp, verbatim.
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Parses the timestamp for display; `None` when it is not RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Host component of the story URL, recomputed on every call.
    pub fn hostname(&self) -> Result<String, AppError> {
        let parsed = Url::parse(&self.url).map_err(|e| AppError::MalformedUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        parsed
            .host_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::MalformedUrl {
                url: self.url.clone(),
                reason: "url has no host".to_string(),
            })
    }
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", s)
    }
}

/// Fields a user fills in to submit a story. Sent as-is; the service validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl StoryDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            url: url.into(),
        }
    }
}

/// The catalog: every story visible to all users, in service order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn find(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|story| story.story_id == story_id)
    }

    /// Records a story the service has just accepted.
    ///
    /// Inserts at the front of this catalog, then at the front of the
    /// session's own stories, and returns the story. Must only be called once
    /// the remote create has succeeded; both insertions happen or neither does.
    pub(crate) fn insert_created(&mut self, session: &mut Session, story: Story) -> Story {
        self.stories.insert(0, story.clone());
        session.insert_own_story(story.clone());
        story
    }
}

impl From<Vec<Story>> for StoryList {
    fn from(stories: Vec<Story>) -> Self {
        Self::new(stories)
    }
}
