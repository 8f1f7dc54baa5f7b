// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! HTTP client implementation for the Paradigm REST API.
//!
//! The core type exported by this module is [`ParadigmHttpClient`]. Key
//! responsibilities handled internally:
//! • Request signing and header composition (HMAC-SHA256 over the canonical
//!   request string).
//! • Bounded request timeouts with no implicit retry.
//! • Decoding of JSON response bodies into an open key-to-value mapping, since
//!   Paradigm response schemas are endpoint-specific.

use std::time::Duration;

use chrono::Utc;
use reqwest::{
    Method,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use tracing::debug;

use super::error::ParadigmHttpError;
use crate::{
    common::{
        consts::{DEFAULT_HTTP_TIMEOUT_SECS, PARADIGM_SIGNATURE_HEADER, PARADIGM_TIMESTAMP_HEADER},
        credential::Credential,
    },
    config::ParadigmHttpConfig,
};

/// HTTP client for the Paradigm REST API.
///
/// Each call signs the request, sends it once, and surfaces any failure to the
/// caller; there is no retry or recovery beyond the configured timeout.
#[derive(Clone, Debug)]
pub struct ParadigmHttpClient {
    base_url: String,
    credential: Credential,
    client: reqwest::Client,
}

impl ParadigmHttpClient {
    /// Creates a new [`ParadigmHttpClient`] from the given configuration.
    ///
    /// The secret is decoded here, so a malformed secret fails before any
    /// network activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the secret is not valid base64 or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: ParadigmHttpConfig) -> Result<Self, ParadigmHttpError> {
        let credential = Credential::new(config.access_key.clone(), config.api_secret.clone())?;
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS));

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: config.http_url(),
            credential,
            client,
        })
    }

    /// Creates a new [`ParadigmHttpClient`] from environment variables.
    ///
    /// Reads `PARADIGM_API_KEY` and `PARADIGM_API_SECRET`, with an optional
    /// `PARADIGM_HTTP_HOST` base URL override.
    ///
    /// # Errors
    ///
    /// Returns an error if either credential variable is unset or the secret
    /// is not valid base64.
    pub fn from_env() -> Result<Self, ParadigmHttpError> {
        let access_key = std::env::var("PARADIGM_API_KEY")
            .map_err(|_| ParadigmHttpError::MissingCredentials("PARADIGM_API_KEY".to_string()))?;
        let api_secret = std::env::var("PARADIGM_API_SECRET")
            .map_err(|_| ParadigmHttpError::MissingCredentials("PARADIGM_API_SECRET".to_string()))?;

        let config = ParadigmHttpConfig {
            base_url: std::env::var("PARADIGM_HTTP_HOST").ok(),
            ..ParadigmHttpConfig::new(access_key, api_secret)
        };

        Self::new(config)
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the authentication headers for a request.
    ///
    /// The path must include any query string, exactly as sent on the wire,
    /// since it is bound into the signature.
    fn build_headers(
        &self,
        timestamp: &str,
        method: &str,
        path: &str,
        body: &str,
    ) -> Result<HeaderMap, ParadigmHttpError> {
        let signature = self.credential.sign(timestamp, method, path, body);

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.credential.access_key))?,
        );
        headers.insert(
            HeaderName::from_static(PARADIGM_TIMESTAMP_HEADER),
            HeaderValue::from_str(timestamp)?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(PARADIGM_SIGNATURE_HEADER),
            HeaderValue::from_str(&signature)?,
        );

        Ok(headers)
    }

    /// Signs and sends a single request, decoding the response body as JSON.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<T, ParadigmHttpError> {
        let url = format!("{}{path}", self.base_url);
        let body_str = body.unwrap_or("");

        let timestamp = Utc::now().timestamp_millis().to_string();
        let headers = self.build_headers(&timestamp, method.as_str(), path, body_str)?;

        debug!("Sending request: {method} {url}");

        let mut request = self.client.request(method, &url).headers(headers);
        if let Some(content) = body {
            request = request.body(content.to_string());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ParadigmHttpError::UnexpectedStatus { status, body });
        }

        let text = response.text().await?;
        debug!("Response: {text}");

        Ok(serde_json::from_str(&text)?)
    }

    /// Signs and sends a single request to `base_url + path`.
    ///
    /// Paradigm response schemas vary per endpoint, so the body is decoded
    /// into an open `Map<String, Value>` rather than a typed model.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure (including timeout), a
    /// non-success HTTP status, or a response body that is not a JSON object.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<Map<String, Value>, ParadigmHttpError> {
        self.request(method, path, body).await
    }

    /// Sends a signed GET request for `path`.
    ///
    /// The query string, if any, must already be part of `path` so that it is
    /// covered by the signature. GET requests sign an empty body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn get(&self, path: &str) -> Result<Map<String, Value>, ParadigmHttpError> {
        self.send(Method::GET, path, None).await
    }

    /// Sends a signed POST request with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn post(
        &self,
        path: &str,
        body: &str,
    ) -> Result<Map<String, Value>, ParadigmHttpError> {
        self.send(Method::POST, path, Some(body)).await
    }

    /// Calls the `/echo/` endpoint with the given message.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be decoded.
    pub async fn echo(&self, message: &str) -> Result<Map<String, Value>, ParadigmHttpError> {
        let body = json!({ "message": message }).to_string();
        self.post("/echo/", &body).await
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::common::consts::PARADIGM_HTTP_TEST_URL;

    #[rstest]
    fn test_client_creation() {
        let config = ParadigmHttpConfig::new(
            "test_key".to_string(),
            "dGVzdC1zZWNyZXQ=".to_string(), // base64 encoded "test-secret"
        );
        let client = ParadigmHttpClient::new(config).unwrap();
        assert_eq!(client.base_url(), PARADIGM_HTTP_TEST_URL);
    }

    #[rstest]
    fn test_malformed_secret_fails_at_construction() {
        let config =
            ParadigmHttpConfig::new("test_key".to_string(), "not base64!!".to_string());
        let result = ParadigmHttpClient::new(config);

        match result {
            Err(e) => assert!(e.is_input_error()),
            Ok(_) => panic!("expected input error for malformed secret"),
        }
    }

    #[rstest]
    fn test_build_headers_sets_all_four() {
        let config = ParadigmHttpConfig::new(
            "test_key".to_string(),
            "dGVzdC1zZWNyZXQ=".to_string(),
        );
        let client = ParadigmHttpClient::new(config).unwrap();

        let headers = client
            .build_headers("1700000000000", "POST", "/echo/", r#"{"message": "hello"}"#)
            .unwrap();

        assert_eq!(headers.len(), 4);
        assert_eq!(headers[AUTHORIZATION], "Bearer test_key");
        assert_eq!(headers[PARADIGM_TIMESTAMP_HEADER], "1700000000000");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(
            headers[PARADIGM_SIGNATURE_HEADER],
            "/htEJYuWg0rtYRCyxW574qtL49/+f8a7u/ta+PfKRYA="
        );
    }
}
