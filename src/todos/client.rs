//! HTTP client for remote todo service requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! against the service's collection resources, handling query parameters,
//! status checking, and response parsing.

use super::error::TodosError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Makes requests to the todo service and tries to conform response data to
/// the expected shape.
///
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Request a collection resource and return the parsed response data or
    /// error.
    ///
    pub async fn get<T>(&self, path: &str, params: &[(&str, String)]) -> Result<T, TodosError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Submit a record to a collection resource and return the parsed
    /// response data or error.
    ///
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, TodosError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::parse(response).await
    }

    /// Check response status and conform the body to the expected shape.
    ///
    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, TodosError> {
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!("Service request failed with status {}: {}", status, message);
            return Err(TodosError::Service {
                status: status.as_u16(),
                message,
            });
        }

        // Keep the response bytes so we can log them if deserialization fails
        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<T>(&response_bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                log::error!(
                    "Failed to deserialize service response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(TodosError::Deserialization(e))
            }
        }
    }
}
