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
use crate::infrastructure::kubernetes::resources::pod::{
    EnvironmentBuilder, LabeledResourceBuilder, ProbeBuilder,
};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, PodSecurityContext, PodSpec, PodTemplateSpec, SecurityContext,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};

/// Deployment of the Rallly (Next.js) application container.
pub struct AppDeploymentBuilder {
    config: EnvironmentConfig,
}

impl LabeledResourceBuilder for AppDeploymentBuilder {
    fn component_name(&self) -> Option<&str> {
        Some(APP_NAME)
    }
}

impl AppDeploymentBuilder {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self { config }
    }

    pub fn build(&self) -> Deployment {
        Deployment {
            metadata: ObjectMeta {
                name: Some(APP_NAME.to_string()),
                labels: Some(self.get_labels()),
                ..Default::default()
            },
            spec: Some(DeploymentSpec {
                selector: LabelSelector {
                    match_labels: Some(self.get_selector_labels()),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(self.get_labels()),
                        ..Default::default()
                    }),
                    spec: Some(self.build_pod_spec()),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn build_pod_spec(&self) -> PodSpec {
        PodSpec {
            enable_service_links: Some(false),
            security_context: Some(PodSecurityContext {
                run_as_user: Some(RUN_AS_USER),
                run_as_group: Some(RUN_AS_GROUP),
                fs_group: Some(FS_GROUP),
                ..Default::default()
            }),
            init_containers: Some(Vec::new()),
            containers: vec![self.build_container()],
            ..Default::default()
        }
    }

    fn build_container(&self) -> Container {
        let probe = ProbeBuilder::build_http_probe(self.config.hostname, APP_PORT);

        Container {
            name: APP_NAME.to_string(),
            image: Some(APP_IMAGE.to_string()),
            env: Some(EnvironmentBuilder::for_app(&self.config).build()),
            ports: Some(vec![ContainerPort {
                container_port: APP_PORT,
                ..Default::default()
            }]),
            security_context: Some(SecurityContext {
                read_only_root_filesystem: Some(false),
                allow_privilege_escalation: Some(false),
                ..Default::default()
            }),
            startup_probe: Some(probe.clone()),
            liveness_probe: Some(probe),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::EnvironmentName;

    fn build(name: EnvironmentName) -> Deployment {
        AppDeploymentBuilder::new(EnvironmentConfig::for_name(name)).build()
    }

    #[test]
    fn test_pod_runs_as_non_root() {
        let deployment = build(EnvironmentName::Dev);
        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();
        let security = pod_spec.security_context.unwrap();

        assert_eq!(security.run_as_user, Some(1000));
        assert_eq!(security.run_as_group, Some(1000));
        assert_eq!(security.fs_group, Some(1000));
        assert_eq!(pod_spec.enable_service_links, Some(false));
        assert_eq!(pod_spec.init_containers, Some(Vec::new()));
    }

    #[test]
    fn test_single_container_with_identical_probes() {
        let deployment = build(EnvironmentName::Production);
        let pod_spec = deployment.spec.unwrap().template.spec.unwrap();
        assert_eq!(pod_spec.containers.len(), 1);

        let container = &pod_spec.containers[0];
        assert_eq!(container.name, "rallly");
        assert_eq!(container.image.as_deref(), Some("lukevella/rallly:latest"));
        assert_eq!(container.startup_probe, container.liveness_probe);

        let ports = container.ports.as_ref().unwrap();
        assert_eq!(ports.len(), 1);
        assert_eq!(ports[0].container_port, 3000);

        let headers = container
            .liveness_probe
            .as_ref()
            .and_then(|p| p.http_get.as_ref())
            .and_then(|g| g.http_headers.as_ref())
            .unwrap();
        assert_eq!(headers[0].value, "rallly.con2.fi");
    }

    #[test]
    fn test_no_explicit_replicas() {
        let deployment = build(EnvironmentName::Dev);
        assert_eq!(deployment.spec.unwrap().replicas, None);
    }

    #[test]
    fn test_selector_matches_template_labels() {
        let deployment = build(EnvironmentName::Dev);
        let spec = deployment.spec.unwrap();
        let template_labels = spec.template.metadata.unwrap().labels.unwrap();

        assert_eq!(spec.selector.match_labels.unwrap(), template_labels);
        assert_eq!(template_labels.get("component").map(String::as_str), Some("rallly"));
    }
}
