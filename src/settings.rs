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

//! This module contains the definition for es-query configuration and command line arguments.
use config::Config;
use serde::Deserialize;
use snafu::{ResultExt, Snafu};
use std::path::PathBuf;
use structopt::StructOpt;

use crate::utils::config::{config_builder_from, Error as ConfigSourceError};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Prefix of the environment variables read as settings, eg. ES_QUERY_HOST.
pub const ENV_PREFIX: &str = "ES_QUERY";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Config Source Error: {}", source))]
    ConfigSource { source: ConfigSourceError },

    #[snafu(display("Config Merge Error: {} [{}]", msg, source))]
    ConfigMerge {
        msg: String,
        source: config::ConfigError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// An empty host is rejected when the URL is built.
    #[serde(default)]
    pub host: String,
    /// Kept as text, an empty port means the Elasticsearch default.
    pub port: String,
    pub endpoint: String,
    pub pretty: bool,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "es-query",
    about = "Run an Elasticsearch query piped through stdin",
    version = VERSION,
    author = AUTHORS
    )]
pub struct Opts {
    /// Where Elasticsearch is hosted, eg. a name from /etc/hosts
    #[structopt(short = "h", long = "host")]
    pub host: Option<String>,

    /// Elasticsearch's port [default: 9200]
    #[structopt(short = "p", long = "port")]
    pub port: Option<String>,

    /// Endpoint to use, eg. my_index/_search
    #[structopt(short = "e", long = "endpoint")]
    pub endpoint: Option<String>,

    /// Pretty print JSON response
    #[structopt(long = "pretty")]
    pub pretty: bool,

    /// Configuration file providing default settings
    #[structopt(parse(from_os_str), short = "c", long = "config")]
    pub config: Option<PathBuf>,

    /// Override settings values using key=value
    #[structopt(short = "s", long = "setting")]
    pub settings: Vec<String>,
}

impl Settings {
    // Command line flags win over key=value settings, which win over the
    // environment, which wins over the configuration file.
    pub fn new(opts: &Opts) -> Result<Self, Error> {
        let builder = config_builder_from(
            opts.config.as_deref(),
            ENV_PREFIX,
            opts.settings.clone(),
        )
        .context(ConfigSourceSnafu)?;

        let mut builder = builder
            .set_default("port", "")
            .context(ConfigMergeSnafu { msg: "port" })?
            .set_default("pretty", false)
            .context(ConfigMergeSnafu { msg: "pretty" })?
            .set_override_option("host", opts.host.clone())
            .context(ConfigMergeSnafu { msg: "host" })?
            .set_override_option("port", opts.port.clone())
            .context(ConfigMergeSnafu { msg: "port" })?
            .set_override_option("endpoint", opts.endpoint.clone())
            .context(ConfigMergeSnafu { msg: "endpoint" })?;

        // A flag can only turn pretty printing on.
        if opts.pretty {
            builder = builder
                .set_override("pretty", true)
                .context(ConfigMergeSnafu { msg: "pretty" })?;
        }

        let config: Config = builder.build().context(ConfigMergeSnafu {
            msg: String::from("Cannot build the configuration from sources"),
        })?;

        config.try_deserialize().context(ConfigMergeSnafu {
            msg: String::from("Cannot convert configuration into es-query settings"),
        })
    }
}
