/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

use crate::application::config::{Config, Credentials};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::Client as HttpInternalClient;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// HTTP transport for the Trading212 REST API
///
/// Every request carries a Basic `Authorization` header built from the configured
/// key and secret, and every path is appended to the base URL chosen at startup.
/// There is no retry: failures are returned to the caller as they happen.
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a client with the configured timeout
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute URL of an endpoint path
    pub fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.config.rest_api.base_url, path)
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::GET, path, None::<&()>, None::<&()>)
            .await
    }

    /// Makes a GET request with a URL-encoded query
    pub async fn get_with_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, AppError> {
        self.request(Method::GET, path, Some(query), None::<&()>)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(Method::POST, path, None::<&()>, Some(body))
            .await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        self.request(Method::DELETE, path, None::<&()>, None::<&()>)
            .await
    }

    /// Sends one request and decodes the JSON response
    pub async fn request<Q: Serialize, B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<T, AppError> {
        let url = self.url(path);
        let response = make_http_request(
            &self.http_client,
            method,
            &url,
            &self.config.credentials,
            query,
            body,
        )
        .await?;
        parse_response(response).await
    }
}

/// Makes a single authenticated HTTP request
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `credentials` - Key pair for the Basic `Authorization` header
/// * `query` - Optional query parameters, URL-encoded
/// * `body` - Optional request body, serialized to JSON
///
/// # Returns
///
/// * `Ok(Response)` - A response with a success status
/// * `Err(AppError)` - Transport failure or non-success status, with the upstream body
///
/// When the credentials are incomplete the request goes out without an
/// `Authorization` header and the upstream answers 401.
pub async fn make_http_request<Q: Serialize, B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    credentials: &Credentials,
    query: Option<&Q>,
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    if credentials.is_complete() {
        request = request.basic_auth(&credentials.api_key, Some(&credentials.api_secret));
    } else {
        warn!("API credentials are not configured, sending unauthenticated request");
    }

    if let Some(q) = query {
        request = request.query(q);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Failed to read error response body: {}", e);
            String::new()
        }
    };
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::from_status(status, body))
}

/// Decodes a response body, treating an empty body as JSON `null`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(serde_json::from_value(serde_json::Value::Null)?);
    }
    Ok(serde_json::from_str(&text)?)
}
