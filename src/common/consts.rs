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

pub const PARADIGM: &str = "PARADIGM";

// Paradigm REST endpoint constants
pub const PARADIGM_HTTP_URL: &str = "https://api.prod.paradigm.co";
pub const PARADIGM_HTTP_TEST_URL: &str = "https://api.test.paradigm.co";

// Authentication header names (lowercase for `HeaderName::from_static`)
pub const PARADIGM_TIMESTAMP_HEADER: &str = "paradigm-api-timestamp";
pub const PARADIGM_SIGNATURE_HEADER: &str = "paradigm-api-signature";

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
