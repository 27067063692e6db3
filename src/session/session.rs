/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::models::story::Story;
use crate::application::models::user::UserRecord;
use crate::session::interface::{FavoriteState, StoredCredentials};
use serde_json::json;
use std::fmt;

/// The signed-in user: profile, credential token, favorites and own stories.
///
/// Both story sequences are most-recent-first. They may hold separate copies
/// of the same story. Local mutations are only reachable through the services,
/// which apply them after the remote call has succeeded. Logging out is
/// dropping the value.
#[derive(Clone, PartialEq)]
pub struct Session {
    username: String,
    name: String,
    created_at: String,
    token: String,
    favorites: Vec<Story>,
    own_stories: Vec<Story>,
}

impl Session {
    pub fn new(record: UserRecord, token: impl Into<String>) -> Self {
        Self {
            username: record.username,
            name: record.name,
            created_at: record.created_at,
            token: token.into(),
            favorites: record.favorites,
            own_stories: record.stories,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn favorites(&self) -> &[Story] {
        &self.favorites
    }

    pub fn own_stories(&self) -> &[Story] {
        &self.own_stories
    }

    /// What a caller needs to persist to restore this session later.
    pub fn credentials(&self) -> StoredCredentials {
        StoredCredentials {
            username: self.username.clone(),
            token: self.token.clone(),
        }
    }

    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.favorites.iter().any(|story| story.story_id() == story_id)
    }

    pub fn is_own_story(&self, story_id: &str) -> bool {
        self.own_stories.iter().any(|story| story.story_id() == story_id)
    }

    pub fn favorite_state(&self, story_id: &str) -> FavoriteState {
        if self.is_favorite(story_id) {
            FavoriteState::Favorited
        } else {
            FavoriteState::NotFavorited
        }
    }

    // An id already present is moved to the front instead of duplicated.
    pub(crate) fn insert_favorite(&mut self, story: Story) {
        self.favorites.retain(|existing| existing.story_id() != story.story_id());
        self.favorites.insert(0, story);
    }

    /// Drops every favorite with this id and returns how many were removed.
    pub(crate) fn remove_favorite(&mut self, story_id: &str) -> usize {
        let before = self.favorites.len();
        self.favorites.retain(|existing| existing.story_id() != story_id);
        before - self.favorites.len()
    }

    pub(crate) fn insert_own_story(&mut self, story: Story) {
        self.own_stories.insert(0, story);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.username)
            .field("name", &self.name)
            .field("created_at", &self.created_at)
            .field("token", &"[REDACTED]")
            .field("favorites", &self.favorites.len())
            .field("own_stories", &self.own_stories.len())
            .finish()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = json!({
            "username": self.username,
            "name": self.name,
            "created_at": self.created_at,
            "token": "[REDACTED]",
            "favorites": self.favorites.len(),
            "own_stories": self.own_stories.len(),
        });
        write!(f, "{}", value)
    }
}
