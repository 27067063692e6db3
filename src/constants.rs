/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

pub(crate) const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub(crate) const USER_AGENT: &str = concat!("story-client/", env!("CARGO_PKG_VERSION"));

pub(crate) const STORIES_SEGMENT: &str = "stories";
pub(crate) const SIGNUP_SEGMENT: &str = "signup";
pub(crate) const LOGIN_SEGMENT: &str = "login";
pub(crate) const USERS_SEGMENT: &str = "users";
pub(crate) const FAVORITES_SEGMENT: &str = "favorites";

pub(crate) const TOKEN_QUERY_KEY: &str = "token";
