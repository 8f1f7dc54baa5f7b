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

//! Configuration structures for the Paradigm HTTP client.

use crate::common::consts::{DEFAULT_HTTP_TIMEOUT_SECS, PARADIGM_HTTP_TEST_URL, PARADIGM_HTTP_URL};

/// Configuration for the Paradigm HTTP client.
#[derive(Clone, Debug)]
pub struct ParadigmHttpConfig {
    /// Paradigm account access key, presented as the bearer token.
    pub access_key: String,
    /// Base64-encoded account secret used for request signing.
    pub api_secret: String,
    /// Override for the REST base URL.
    pub base_url: Option<String>,
    /// When true the client will use the Paradigm test environment endpoint.
    pub is_testnet: bool,
    /// HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ParadigmHttpConfig {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            api_secret: String::new(),
            base_url: None,
            is_testnet: true,
            timeout_secs: Some(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl ParadigmHttpConfig {
    /// Creates a new configuration with the given credentials and default settings.
    #[must_use]
    pub fn new(access_key: String, api_secret: String) -> Self {
        Self {
            access_key,
            api_secret,
            ..Default::default()
        }
    }

    /// Returns the REST base URL, respecting the testnet flag and overrides.
    #[must_use]
    pub fn http_url(&self) -> String {
        self.base_url.clone().unwrap_or_else(|| {
            if self.is_testnet {
                PARADIGM_HTTP_TEST_URL.to_string()
            } else {
                PARADIGM_HTTP_URL.to_string()
            }
        })
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
