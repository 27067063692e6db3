use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::session::interface::StoredCredentials;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub rest_api: RestApiConfig,
    pub stored_credentials: Option<StoredCredentials>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestApiConfig {
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout: u64,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stored = match &self.stored_credentials {
            Some(credentials) => credentials.to_string(),
            None => "null".to_string(),
        };
        write!(
            f,
            "{{\"rest_api\":{},\"stored_credentials\":{}}}",
            self.rest_api, stored
        )
    }
}

impl fmt::Display for RestApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{\"base_url\":\"{}\",\"timeout\":{}}}",
            self.base_url, self.timeout
        )
    }
}

pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

fn get_env_non_empty(env_var: &str) -> Option<String> {
    env::var(env_var).ok().filter(|val| !val.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        let stored_credentials = match (
            get_env_non_empty("STORY_USERNAME"),
            get_env_non_empty("STORY_TOKEN"),
        ) {
            (Some(username), Some(token)) => Some(StoredCredentials { username, token }),
            _ => None,
        };

        let mut timeout = get_env_or_default("STORY_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS);
        if timeout == 0 {
            error!("STORY_REST_TIMEOUT must be positive, using default");
            timeout = DEFAULT_TIMEOUT_SECS;
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("STORY_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout,
            },
            stored_credentials,
        }
    }
}
