use crate::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::TransportError;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

/// Placeholder for calls that carry no JSON body.
pub const NO_BODY: Option<&()> = None;

/// Boundary to the remote story service.
///
/// `path` is a list of raw segments; implementations are responsible for
/// encoding each one. Every call is attempted exactly once.
#[async_trait]
pub trait StoryHttpClient: Send + Sync {
    /// Sends a request and decodes the JSON response body into `T`.
    async fn request<B, T>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, TransportError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send;

    /// Sends a request whose response body is not needed.
    async fn execute<B>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(), TransportError>
    where
        B: Serialize + Sync + ?Sized;
}

/// `reqwest` backed client for the story service REST API.
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: Url,
}

impl RestClient {
    /// Creates a new client from the REST section of the configuration.
    ///
    /// The configured timeout applies to every request; a call that exceeds
    /// it fails with `TransportError::Network`.
    pub fn new(config: &RestApiConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TransportError::InvalidEndpoint(url::ParseError::RelativeUrlWithCannotBeABaseBase)
            })?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<String, TransportError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let url = self.endpoint(path)?;
        debug!("Sending {} request to {}", method, url);

        let mut request = self.client.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // the url may carry the token as a query parameter
                let e = e.without_url();
                error!("Failed to send request: {:?}", e);
                return Err(e.into());
            }
        };

        Self::handle_response(response).await
    }

    async fn handle_response(response: Response) -> Result<String, TransportError> {
        let status = response.status();
        let body_text = response.text().await.map_err(reqwest::Error::without_url)?;

        debug!("Response Status: {}", status);
        debug!("Response Body: {} bytes", body_text.len());

        if status.is_success() {
            Ok(body_text)
        } else {
            error!(
                "API request failed. Status: {}, Body: {}",
                status, body_text
            );
            Err(TransportError::from_response(status, &body_text))
        }
    }
}

#[async_trait]
impl StoryHttpClient for RestClient {
    #[instrument(skip(self, query, body))]
    async fn request<B, T>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<T, TransportError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned + Send,
    {
        let body_text = self.send(method, path, query, body).await?;
        let decoded = serde_json::from_str(&body_text).map_err(|e| {
            error!("Failed to deserialize response body: {}", e);
            e
        })?;
        Ok(decoded)
    }

    #[instrument(skip(self, query, body))]
    async fn execute<B>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> Result<(), TransportError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(method, path, query, body).await?;
        Ok(())
    }
}

impl fmt::Display for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{\"base_url\":\"{}\"}}", self.base_url)
    }
}
