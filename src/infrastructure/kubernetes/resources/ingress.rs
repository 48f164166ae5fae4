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

use crate::domain::config::EnvironmentConfig;
use crate::infrastructure::constants::*;
use crate::infrastructure::kubernetes::resources::pod::stack_labels;
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressTLS, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub struct IngressBuilder {
    config: EnvironmentConfig,
}

impl IngressBuilder {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Ingress {
        Ingress {
            metadata: ObjectMeta {
                name: Some(STACK.to_string()),
                labels: Some(stack_labels(None)),
                annotations: Some(self.build_annotations()),
                ..Default::default()
            },
            spec: Some(IngressSpec {
                tls: Some(self.build_tls()),
                rules: Some(vec![self.build_rule()]),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    // Both TLS and its annotations are left empty rather than omitted.
    fn build_tls(&self) -> Vec<IngressTLS> {
        if !self.config.tls_enabled {
            return Vec::new();
        }

        vec![IngressTLS {
            hosts: Some(vec![self.config.hostname.to_string()]),
            secret_name: Some(TLS_SECRET_NAME.to_string()),
        }]
    }

    fn build_annotations(&self) -> BTreeMap<String, String> {
        let mut annotations = BTreeMap::new();
        if self.config.tls_enabled {
            annotations.insert(
                ANNOTATION_CLUSTER_ISSUER.to_string(),
                CLUSTER_ISSUER.to_string(),
            );
            annotations.insert(ANNOTATION_SSL_REDIRECT.to_string(), "true".to_string());
        }
        annotations
    }

    fn build_rule(&self) -> IngressRule {
        IngressRule {
            host: Some(self.config.hostname.to_string()),
            http: Some(HTTPIngressRuleValue {
                paths: vec![HTTPIngressPath {
                    path_type: INGRESS_PATH_TYPE.to_string(),
                    path: Some(INGRESS_PATH.to_string()),
                    backend: IngressBackend {
                        service: Some(IngressServiceBackend {
                            name: APP_NAME.to_string(),
                            port: Some(ServiceBackendPort {
                                number: Some(APP_PORT),
                                ..Default::default()
                            }),
                        }),
                        ..Default::default()
                    },
                }],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EnvironmentName;

    fn build(name: EnvironmentName) -> Ingress {
        IngressBuilder::new(EnvironmentConfig::for_name(name)).build()
    }

    #[test]
    fn test_ingress_without_tls() {
        let ingress = build(EnvironmentName::Dev);

        assert_eq!(ingress.metadata.annotations, Some(BTreeMap::new()));
        assert_eq!(ingress.spec.unwrap().tls, Some(Vec::new()));
    }

    #[test]
    fn test_ingress_with_tls() {
        let ingress = build(EnvironmentName::Production);

        let annotations = ingress.metadata.annotations.unwrap();
        assert_eq!(
            annotations.get(ANNOTATION_CLUSTER_ISSUER).map(String::as_str),
            Some("letsencrypt-prod")
        );
        assert_eq!(
            annotations.get(ANNOTATION_SSL_REDIRECT).map(String::as_str),
            Some("true")
        );

        let tls = ingress.spec.unwrap().tls.unwrap();
        assert_eq!(tls.len(), 1);
        assert_eq!(tls[0].hosts, Some(vec!["rallly.con2.fi".to_string()]));
        assert_eq!(tls[0].secret_name.as_deref(), Some("ingress-letsencrypt"));
    }

    #[test]
    fn test_rule_routes_everything_to_app() {
        let ingress = build(EnvironmentName::Dev);
        let rules = ingress.spec.unwrap().rules.unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].host.as_deref(), Some("rallly.localhost"));

        let paths = &rules[0].http.as_ref().unwrap().paths;
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].path.as_deref(), Some("/"));
        assert_eq!(paths[0].path_type, "Prefix");

        let backend = paths[0].backend.service.as_ref().unwrap();
        assert_eq!(backend.name, "rallly");
        assert_eq!(backend.port.as_ref().and_then(|p| p.number), Some(3000));
    }

    #[test]
    fn test_ingress_carries_only_stack_label() {
        let ingress = build(EnvironmentName::Dev);
        let labels = ingress.metadata.labels.unwrap();
        assert_eq!(labels.len(), 1);
        assert!(labels.contains_key("stack"));
    }
}
