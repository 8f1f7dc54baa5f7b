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

//! Demonstration binary: sign and send a single `POST /echo/` request against
//! the Paradigm test environment.

use paradigm_client::{ParadigmHttpClient, ParadigmHttpConfig};
use tracing::level_filters::LevelFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        println!("Usage: paradigm-echo <access-key> <secret>");
        return;
    }

    let config = ParadigmHttpConfig::new(args[0].clone(), args[1].clone());
    let result = async {
        let client = ParadigmHttpClient::new(config)?;
        client.post("/echo/", r#"{"message": "hello"}"#).await
    }
    .await;

    match result {
        Ok(response) => tracing::info!("Received {response:?}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}
