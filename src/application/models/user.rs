/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 14/10/26
 ******************************************************************************/
use crate::application::models::story::{Story, StoryDraft};
use serde::{Deserialize, Serialize};

/// User profile as returned by signup, login and user lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(default)]
    pub favorites: Vec<Story>,
    /// Stories posted by this user.
    #[serde(default)]
    pub stories: Vec<Story>,
}

/// `GET /stories`
#[derive(Debug, Deserialize)]
pub(crate) struct StoriesEnvelope {
    pub stories: Vec<Story>,
}

/// `POST /stories`
#[derive(Debug, Deserialize)]
pub(crate) struct StoryEnvelope {
    pub story: Story,
}

/// `GET /users/{username}`
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: UserRecord,
}

/// `POST /signup` and `POST /login`
#[derive(Deserialize)]
pub(crate) struct AuthEnvelope {
    pub user: UserRecord,
    pub token: String,
}

#[derive(Serialize)]
pub(crate) struct NewStoryRequest<'a> {
    pub token: &'a str,
    pub story: &'a StoryDraft,
}

#[derive(Serialize)]
pub(crate) struct SignupRequest<'a> {
    pub user: SignupUser<'a>,
}

#[derive(Serialize)]
pub(crate) struct SignupUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub user: LoginUser<'a>,
}

#[derive(Serialize)]
pub(crate) struct LoginUser<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body of the favorite add/remove calls.
#[derive(Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub token: &'a str,
}
