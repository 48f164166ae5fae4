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

use crate::domain::config::{EnvironmentConfig, EnvironmentName};
use crate::infrastructure::constants::*;
use crate::infrastructure::kubernetes::resources::{
    AppDeploymentBuilder, IngressBuilder, PostgresDeploymentBuilder, SecretBuilder, SecretValues,
    ServiceBuilder,
};
use crate::shared::error::Result;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Secret, Service};
use k8s_openapi::api::networking::v1::Ingress;
use serde::Serialize;

/// Render a document the way it is written to disk: 2-space indented JSON
/// without a trailing newline.
pub fn to_manifest_json<T: Serialize + ?Sized>(document: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Manifest {
    Deployment(Box<Deployment>),
    Service(Box<Service>),
    Ingress(Box<Ingress>),
    Secret(Box<Secret>),
}

impl Manifest {
    pub fn kind(&self) -> &'static str {
        match self {
            Manifest::Deployment(_) => "Deployment",
            Manifest::Service(_) => "Service",
            Manifest::Ingress(_) => "Ingress",
            Manifest::Secret(_) => "Secret",
        }
    }
}

/// One output file. `None` means the file must not exist after
/// materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub file_name: &'static str,
    pub manifest: Option<Manifest>,
}

impl ManifestEntry {
    fn present(file_name: &'static str, manifest: Manifest) -> Self {
        Self {
            file_name,
            manifest: Some(manifest),
        }
    }

    fn managed(file_name: &'static str, managed: bool, build: impl FnOnce() -> Manifest) -> Self {
        Self {
            file_name,
            manifest: managed.then(build),
        }
    }

    pub fn render(&self) -> Result<Option<String>> {
        self.manifest.as_ref().map(to_manifest_json).transpose()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSet {
    environment: Option<EnvironmentName>,
    entries: Vec<ManifestEntry>,
}

impl ManifestSet {
    /// All documents of the stack for `config`, in write order.
    pub fn for_environment(config: &EnvironmentConfig) -> Self {
        let entries = vec![
            ManifestEntry::present(
                DEPLOYMENT_FILE,
                Manifest::Deployment(Box::new(AppDeploymentBuilder::new(config.clone()).build())),
            ),
            ManifestEntry::present(
                SERVICE_FILE,
                Manifest::Service(Box::new(ServiceBuilder::app().build())),
            ),
            ManifestEntry::present(
                INGRESS_FILE,
                Manifest::Ingress(Box::new(IngressBuilder::new(config.clone()).build())),
            ),
            ManifestEntry::managed(POSTGRES_DEPLOYMENT_FILE, config.postgres_managed, || {
                Manifest::Deployment(Box::new(PostgresDeploymentBuilder::new().build()))
            }),
            ManifestEntry::managed(POSTGRES_SERVICE_FILE, config.postgres_managed, || {
                Manifest::Service(Box::new(ServiceBuilder::postgres().build()))
            }),
            ManifestEntry::managed(SECRET_FILE, config.secret_managed, || {
                Manifest::Secret(Box::new(
                    SecretBuilder::new(SecretValues::insecure_defaults()).build(),
                ))
            }),
        ];

        Self {
            environment: Some(config.name),
            entries,
        }
    }

    /// Only `secret.json`, with empty values for an operator to fill in.
    pub fn secret_template() -> Self {
        Self {
            environment: None,
            entries: vec![ManifestEntry::present(
                SECRET_FILE,
                Manifest::Secret(Box::new(SecretBuilder::new(SecretValues::empty()).build())),
            )],
        }
    }

    pub fn environment(&self) -> Option<EnvironmentName> {
        self.environment
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn get(&self, file_name: &str) -> Option<&Manifest> {
        self.entries
            .iter()
            .find(|entry| entry.file_name == file_name)
            .and_then(|entry| entry.manifest.as_ref())
    }
}
