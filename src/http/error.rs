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

//! Defines the error structures and enumerations for the Paradigm integration.

use reqwest::StatusCode;
use thiserror::Error;

/// A typed error enumeration for the Paradigm HTTP client.
#[derive(Debug, Error)]
pub enum ParadigmHttpError {
    /// Error variant when the account secret is not valid base64.
    #[error("Invalid base64 secret: {0}")]
    InvalidSecret(#[from] base64::DecodeError),

    /// Error variant when credentials were expected in the environment but not found.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// Error variant when a credential value cannot be used as a header.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Underlying transport error, including client build, connect, and timeout failures.
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Failure decoding the response body as JSON.
    #[error("JSON decode error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Any non-success HTTP status returned by Paradigm.
    #[error("Unexpected HTTP status code {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

impl ParadigmHttpError {
    /// Returns `true` when the error occurred before any network activity.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSecret(_) | Self::MissingCredentials(_) | Self::InvalidHeader(_)
        )
    }

    /// Returns `true` when the error is a transport-level failure.
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::NetworkError(_))
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
