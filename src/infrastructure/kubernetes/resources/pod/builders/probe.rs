// Copyright 2025 JiangLong.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::infrastructure::constants::{PROBE_HOST_HEADER, PROBE_PATH};
use k8s_openapi::api::core::v1::{HTTPGetAction, HTTPHeader, Probe};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

pub struct ProbeBuilder;

impl ProbeBuilder {
    /// HTTP GET probe sent with the public `Host` header so that host-based
    /// routing inside the app answers it.
    pub fn build_http_probe(hostname: &str, port: i32) -> Probe {
        Probe {
            http_get: Some(HTTPGetAction {
                path: Some(PROBE_PATH.to_string()),
                port: IntOrString::Int(port),
                http_headers: Some(vec![HTTPHeader {
                    name: PROBE_HOST_HEADER.to_string(),
                    value: hostname.to_string(),
                }]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_probe_carries_host_header() {
        let probe = ProbeBuilder::build_http_probe("rallly.localhost", 3000);
        let http_get = probe.http_get.unwrap();

        assert_eq!(http_get.path.as_deref(), Some("/"));
        assert_eq!(http_get.port, IntOrString::Int(3000));

        let headers = http_get.http_headers.unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].name, "host");
        assert_eq!(headers[0].value, "rallly.localhost");
    }
}
