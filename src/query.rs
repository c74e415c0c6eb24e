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

//! The query pipeline: read the query, build the URL, execute the request and
//! format the response. Each step is a hard boundary, the first failure stops
//! the run.

use serde_json::Value;
use slog_scope::debug;
use snafu::{ensure, ResultExt};
use std::io::{Read, Write};

use crate::error::{
    ConfigurationSnafu, Error, InvalidResponseSnafu, MalformedInputSnafu, ReadInputSnafu,
    WriteSnafu,
};
use crate::remote::Transport;
use crate::settings::Settings;

pub const DEFAULT_PORT: u16 = 9200;

const REQUEST_FAILURE: &str = "There was an error making the request";

/// Consumes the whole input and parses it as a single JSON document.
/// Empty input is malformed.
pub fn read_query<R: Read>(mut input: R) -> Result<Value, Error> {
    let mut raw = String::new();
    input.read_to_string(&mut raw).context(ReadInputSnafu)?;
    serde_json::from_str(&raw).context(MalformedInputSnafu)
}

/// Produces `http://{host}:{port}/{endpoint}`. An empty port falls back to
/// the Elasticsearch default, and leading slashes of the endpoint are dropped.
pub fn build_url(host: &str, port: &str, endpoint: &str) -> Result<String, Error> {
    ensure!(
        !host.is_empty(),
        ConfigurationSnafu {
            msg: format!("No host was given [{}] not supported", host),
        }
    );

    let port = if port.is_empty() {
        DEFAULT_PORT.to_string()
    } else {
        port.to_string()
    };
    let endpoint = endpoint.trim_start_matches('/');

    Ok(format!("http://{}:{}/{}", host, port, endpoint))
}

/// Sends the query as the body of a GET request and returns the raw response.
///
/// The url and the query are always echoed on `diagnostics` before the call.
pub fn execute<T, E>(
    transport: &T,
    url: &str,
    query: &Value,
    mut diagnostics: E,
) -> Result<String, Error>
where
    T: Transport + ?Sized,
    E: Write,
{
    writeln!(diagnostics, "{} {}", url, query).context(WriteSnafu)?;

    let body = format!("{:#}", query);
    match transport.get_json(url, &body) {
        Ok(response) => Ok(response),
        Err(source) => {
            writeln!(diagnostics, "{}", REQUEST_FAILURE).context(WriteSnafu)?;
            Err(Error::Request { source })
        }
    }
}

/// Parses the response and renders it, indented by 2 spaces when `pretty`,
/// on a single line otherwise.
pub fn format_response(body: &str, pretty: bool) -> Result<String, Error> {
    let value: Value = serde_json::from_str(body).context(InvalidResponseSnafu)?;
    if pretty {
        Ok(format!("{:#}", value))
    } else {
        Ok(value.to_string())
    }
}

pub fn format_output<W: Write>(body: &str, pretty: bool, mut output: W) -> Result<(), Error> {
    let formatted = format_response(body, pretty)?;
    writeln!(output, "{}", formatted).context(WriteSnafu)?;
    output.flush().context(WriteSnafu)
}

/// Runs the whole pipeline once: read, build the URL, execute, format.
pub fn run<T, R, O, E>(
    settings: &Settings,
    transport: &T,
    input: R,
    output: O,
    mut diagnostics: E,
) -> Result<(), Error>
where
    T: Transport + ?Sized,
    R: Read,
    O: Write,
    E: Write,
{
    let query = read_query(input)?;
    let url = build_url(&settings.host, &settings.port, &settings.endpoint)?;
    debug!("Query ready"; "url" => &url, "pretty" => settings.pretty);

    let response = execute(transport, &url, &query, &mut diagnostics)?;
    debug!("Formatting response"; "bytes" => response.len());

    format_output(&response, settings.pretty, output)
}
