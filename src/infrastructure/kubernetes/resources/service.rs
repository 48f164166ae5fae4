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

use crate::infrastructure::constants::{APP_NAME, APP_PORT, POSTGRES_NAME, POSTGRES_PORT};
use crate::infrastructure::kubernetes::resources::pod::LabeledResourceBuilder;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// ClusterIP service exposing one port of a stack component under the
/// component's own name.
pub struct ServiceBuilder {
    name: String,
    port: i32,
}

impl LabeledResourceBuilder for ServiceBuilder {
    fn component_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl ServiceBuilder {
    pub fn new(name: impl Into<String>, port: i32) -> Self {
        Self {
            name: name.into(),
            port,
        }
    }

    pub fn app() -> Self {
        Self::new(APP_NAME, APP_PORT)
    }

    pub fn postgres() -> Self {
        Self::new(POSTGRES_NAME, POSTGRES_PORT)
    }

    pub fn build(&self) -> Service {
        Service {
            metadata: ObjectMeta {
                name: Some(self.name.clone()),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(ServiceSpec {
                ports: Some(vec![ServicePort {
                    port: self.port,
                    target_port: Some(IntOrString::Int(self.port)),
                    ..Default::default()
                }]),
                selector: Some(self.get_selector_labels()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
