// Copyright © 2016, Canal TP and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
//     the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
//     powered by Canal TP (www.canaltp.fr).
// Help us simplify mobility and open public transport:
//     a non ending quest to the responsive locomotion way of traveling!
//
// LICENCE: This program is free software; you can redistribute it
// and/or modify it under the terms of the GNU Affero General Public
// License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public
// License along with this program. If not, see
// <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// IRC #navitia on freenode
// https://groups.google.com/d/forum/navitia
// www.navitia.io

//! Sending the query over the wire.
//!
//! Elasticsearch accepts the search DSL as the body of a GET request. Some
//! HTTP intermediaries reject a GET with a body, but this is what the search
//! service expects, so the method is kept as is.

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use slog_scope::debug;
use snafu::{ResultExt, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not build the HTTP client: {}", source))]
    ClientBuild { source: reqwest::Error },

    #[snafu(display("GET {} failed: {}", url, source))]
    Send { url: String, source: reqwest::Error },

    #[snafu(display("Could not read the response body: {}", source))]
    ReadBody { source: reqwest::Error },
}

/// Issues a single GET carrying a JSON body and hands back the raw response text.
pub trait Transport {
    fn get_json(&self, url: &str, body: &str) -> Result<String, Error>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Blocking client with reqwest's own defaults, including its timeout.
    /// Proxies are disabled: hosts are resolved locally, usually via /etc/hosts.
    pub fn new() -> Result<Self, Error> {
        let client = Client::builder().no_proxy().build().context(ClientBuildSnafu)?;
        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, url: &str, body: &str) -> Result<String, Error> {
        debug!("Sending GET request"; "url" => url, "bytes" => body.len());
        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()
            .context(SendSnafu { url })?;

        // Elasticsearch reports query errors as JSON bodies, so a non 2xx
        // status is passed through and left to the formatting step.
        debug!("Response received"; "status" => response.status().as_u16());
        response.text().context(ReadBodySnafu)
    }
}
