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

use crate::infrastructure::constants::*;
use crate::infrastructure::kubernetes::resources::pod::LabeledResourceBuilder;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, EnvVar, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

/// Single-replica PostgreSQL for environments where the database is not
/// provided externally. The password is a fixed non-production literal.
pub struct PostgresDeploymentBuilder;

impl LabeledResourceBuilder for PostgresDeploymentBuilder {
    fn component_name(&self) -> Option<&str> {
        Some(POSTGRES_NAME)
    }
}

impl PostgresDeploymentBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self) -> Deployment {
        let container = Container {
            name: POSTGRES_NAME.to_string(),
            image: Some(POSTGRES_IMAGE.to_string()),
            ports: Some(vec![ContainerPort {
                container_port: POSTGRES_PORT,
                ..Default::default()
            }]),
            env: Some(vec![EnvVar {
                name: "POSTGRES_PASSWORD".to_string(),
                value: Some(INSECURE_POSTGRES_PASSWORD.to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };

        Deployment {
            metadata: ObjectMeta {
                name: Some(POSTGRES_NAME.to_string()),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                replicas: Some(POSTGRES_REPLICAS),
                selector: LabelSelector {
                    match_labels: Some(self.get_selector_labels()),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.get_labels()),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        containers: vec![container],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

impl Default for PostgresDeploymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Connection string for the in-cluster database built above.
pub fn managed_database_url() -> String {
    format!(
        "postgres://{user}:{password}@{host}:{port}/{database}",
        user = POSTGRES_NAME,
        password = INSECURE_POSTGRES_PASSWORD,
        host = POSTGRES_NAME,
        port = POSTGRES_PORT,
        database = POSTGRES_NAME,
    )
}
