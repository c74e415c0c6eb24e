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

use std::net::TcpListener;
use tokio::runtime::Runtime;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An Elasticsearch stand-in for the blocking client.
///
/// The mock server lives on its own runtime, so requests can be sent from the
/// test thread without being inside an async context.
pub struct FakeNode {
    // dropped before the runtime, expectations are checked on drop
    server: MockServer,
    runtime: Runtime,
}

impl FakeNode {
    pub fn start() -> FakeNode {
        let runtime = Runtime::new().expect("tokio runtime");
        let server = runtime.block_on(MockServer::start());
        FakeNode { server, runtime }
    }

    /// A node that must not receive any request.
    pub fn untouched() -> FakeNode {
        let node = FakeNode::start();
        node.mount(
            Mock::given(any())
                .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
                .expect(0),
        );
        node
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn host(&self) -> String {
        self.server.address().ip().to_string()
    }

    pub fn port(&self) -> String {
        self.server.address().port().to_string()
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.server.uri(), endpoint)
    }

    pub fn verify(&self) {
        self.runtime.block_on(self.server.verify());
    }
}

/// A port nobody listens on.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("address").port();
    drop(listener);
    port.to_string()
}
