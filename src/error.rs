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

use snafu::Snafu;

/// Everything that can abort a query run. Each step of the pipeline fails with
/// its own variant, and the launcher turns any of them into a non-zero exit.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not read the query from standard input: {}", source))]
    ReadInput { source: std::io::Error },

    #[snafu(display("Malformed query, standard input is not valid JSON: {}", source))]
    MalformedInput { source: serde_json::Error },

    #[snafu(display("Configuration Error: {}", msg))]
    Configuration { msg: String },

    #[snafu(display("Request Error: {}", source))]
    Request { source: crate::remote::Error },

    #[snafu(display("Invalid Response, body is not valid JSON: {}", source))]
    InvalidResponse { source: serde_json::Error },

    #[snafu(display("Could not write output: {}", source))]
    Write { source: std::io::Error },

    #[snafu(display("Settings (Configuration or CLI) Error: {}", source))]
    Settings { source: crate::settings::Error },

    #[snafu(display("HTTP Client Error: {}", source))]
    Transport { source: crate::remote::Error },

    #[snafu(display("Logger Error: {}", source))]
    Logger { source: crate::logger::Error },
}
