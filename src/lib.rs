/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Async client for a hosted story-sharing service.
//!
//! [`application::services::story_service`] fetches and extends the catalog,
//! [`application::services::user_service`] handles signup, login, session
//! restore and favorites. Both talk to the service through
//! [`transport::http_client::StoryHttpClient`].

pub mod config;

pub mod application;

pub(crate) mod constants;

pub mod error;

pub mod presentation;

pub mod session;

pub mod transport;

pub mod utils;
