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

use es_query::query;
use es_query::remote::HttpTransport;
use es_query::settings::Settings;
use es_query::Error;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use super::utils::{closed_port, FakeNode};

const QUERY: &str = r#"{"query":{"match_all":{}}}"#;

fn settings(host: String, port: String, endpoint: &str, pretty: bool) -> Settings {
    Settings {
        host,
        port,
        endpoint: endpoint.to_string(),
        pretty,
    }
}

fn node_settings(node: &FakeNode, endpoint: &str, pretty: bool) -> Settings {
    settings(node.host(), node.port(), endpoint, pretty)
}

#[test]
fn should_send_query_as_get_body() {
    let node = FakeNode::start();
    node.mount(
        Mock::given(method("GET"))
            .and(path("/idx/_search"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"query": {"match_all": {}}})))
            .and(body_string_contains("\n  \"query\": {"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"took":1,"hits":{"hits":[]}}"#),
            )
            .expect(1),
    );
    let transport = HttpTransport::new().unwrap();
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    query::run(
        &node_settings(&node, "/idx/_search", true),
        &transport,
        QUERY.as_bytes(),
        &mut output,
        &mut diagnostics,
    )
    .unwrap();

    node.verify();
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "{\n  \"took\": 1,\n  \"hits\": {\n    \"hits\": []\n  }\n}\n"
    );
    assert_eq!(
        String::from_utf8(diagnostics).unwrap(),
        format!("{} {}\n", node.url("idx/_search"), QUERY)
    );
}

#[test]
fn should_print_compact_response_by_default() {
    let node = FakeNode::start();
    node.mount(
        Mock::given(method("GET"))
            .and(path("/idx/_count"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\n  \"count\" : 12\n}"))
            .expect(1),
    );
    let transport = HttpTransport::new().unwrap();
    let mut output = Vec::new();

    query::run(
        &node_settings(&node, "idx/_count", false),
        &transport,
        QUERY.as_bytes(),
        &mut output,
        Vec::new(),
    )
    .unwrap();

    node.verify();
    assert_eq!(String::from_utf8(output).unwrap(), "{\"count\":12}\n");
}

#[test]
fn should_print_error_body_returned_by_elasticsearch() {
    let node = FakeNode::start();
    node.mount(
        Mock::given(method("GET"))
            .and(path("/missing/_search"))
            .respond_with(ResponseTemplate::new(404).set_body_string(
                r#"{"error":{"type":"index_not_found_exception"},"status":404}"#,
            ))
            .expect(1),
    );
    let transport = HttpTransport::new().unwrap();
    let mut output = Vec::new();

    query::run(
        &node_settings(&node, "missing/_search", false),
        &transport,
        QUERY.as_bytes(),
        &mut output,
        Vec::new(),
    )
    .unwrap();

    let printed: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(printed["status"], 404);
}

#[test]
fn should_fail_on_response_that_is_not_json() {
    let node = FakeNode::start();
    node.mount(
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .expect(1),
    );
    let transport = HttpTransport::new().unwrap();
    let mut output = Vec::new();

    let res = query::run(
        &node_settings(&node, "idx/_search", true),
        &transport,
        QUERY.as_bytes(),
        &mut output,
        Vec::new(),
    );

    assert!(matches!(res, Err(Error::InvalidResponse { .. })));
    assert!(output.is_empty());
}

#[test]
fn should_report_connection_failure() {
    let settings = settings(String::from("127.0.0.1"), closed_port(), "idx/_search", true);
    let transport = HttpTransport::new().unwrap();
    let mut output = Vec::new();
    let mut diagnostics = Vec::new();

    let res = query::run(
        &settings,
        &transport,
        QUERY.as_bytes(),
        &mut output,
        &mut diagnostics,
    );

    assert!(matches!(res, Err(Error::Request { .. })));
    assert!(output.is_empty());
    let diagnostics = String::from_utf8(diagnostics).unwrap();
    let lines: Vec<&str> = diagnostics.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("http://127.0.0.1:"));
    assert_eq!(lines[1], "There was an error making the request");
}

#[test]
fn should_not_connect_on_malformed_query() {
    let node = FakeNode::untouched();
    let transport = HttpTransport::new().unwrap();
    let mut diagnostics = Vec::new();

    let res = query::run(
        &node_settings(&node, "idx/_search", true),
        &transport,
        "not-json".as_bytes(),
        Vec::new(),
        &mut diagnostics,
    );

    assert!(matches!(res, Err(Error::MalformedInput { .. })));
    assert!(diagnostics.is_empty());
    node.verify();
}
