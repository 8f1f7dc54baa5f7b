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

//! Client bindings for the [Paradigm](https://www.paradigm.co) trading platform REST API.
//!
//! The `paradigm-client` crate provides request signing and an HTTP client for
//! Paradigm's authenticated REST endpoints. Every request carries an
//! HMAC-SHA256 signature over the canonical string
//! `timestamp + "\n" + method + "\n" + path + "\n" + body`, keyed by the
//! base64-decoded account secret, alongside a bearer token identifying the
//! account.
//!
//! The core types exported by this crate are:
//!
//! - [`Credential`](common::credential::Credential): decodes the account
//!   secret and signs the canonical request string.
//! - [`ParadigmHttpClient`](http::client::ParadigmHttpClient): composes the
//!   authentication headers, sends the request, and decodes the JSON response.
//!
//! A demonstration binary (`paradigm-echo`) signs and sends a single
//! `POST /echo/` request against the test environment.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod common;
pub mod config;
pub mod http;

// Re-exports
pub use crate::{
    common::credential::Credential,
    config::ParadigmHttpConfig,
    http::{client::ParadigmHttpClient, error::ParadigmHttpError},
};
