// src/api/client.rs
//! Thin reqwest wrapper for the GitHub GraphQL endpoint.
//!
//! Handles authentication, the request timeout and the POST itself; decoding
//! lives in the parser module.

use super::parser::parse_envelope;
use super::GraphQlTransport;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::types::{ApiEndpoint, ApiToken};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;

/// A reqwest client bound to one GraphQL endpoint and token.
#[derive(Clone)]
pub struct GitHubHttpClient {
    client: Client,
    endpoint: ApiEndpoint,
}

impl GitHubHttpClient {
    /// Creates a client for `endpoint` (github.com, GitHub Enterprise, tests).
    pub fn with_endpoint(
        token: &ApiToken,
        endpoint: ApiEndpoint,
        timeout: Duration,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(token)?)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, endpoint })
    }

    /// Creates the default headers for GraphQL requests.
    fn create_headers(token: &ApiToken) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", token.as_str());
        let mut auth_value = header::HeaderValue::from_str(&auth_header).map_err(|e| {
            AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
        })?;
        auth_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth_value);

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// POSTs a JSON body to the endpoint.
    pub async fn post<T: Serialize>(&self, body: &T) -> Result<Response, AppError> {
        log::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.as_url().clone())
            .json(body)
            .send()
            .await?;
        log::debug!("Response {} from {}", response.status(), self.endpoint);
        Ok(response)
    }
}

#[async_trait::async_trait]
impl GraphQlTransport for GitHubHttpClient {
    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, AppError> {
        let body = json!({ "query": query, "variables": variables });
        let response = self.post(&body).await?;
        let result = extract_response_text(response).await?;
        parse_envelope(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
