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

use rallly_kube::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

mod test_utils {
    use super::*;

    pub fn generate(dir: &Path, name: EnvironmentName) -> MaterializeReport {
        let config = EnvironmentConfig::for_name(name);
        ManifestWriter::to_dir(dir)
            .materialize(&ManifestSet::for_environment(&config))
            .expect("materialize should succeed")
    }

    pub fn read_json(dir: &Path, file_name: &str) -> Value {
        let content = std::fs::read_to_string(dir.join(file_name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", file_name, e));
        serde_json::from_str(&content).expect("valid JSON")
    }

    pub fn read_all(dir: &Path) -> Vec<(String, Vec<u8>)> {
        let mut files: Vec<_> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| {
                let entry = entry.unwrap();
                (
                    entry.file_name().to_string_lossy().into_owned(),
                    std::fs::read(entry.path()).unwrap(),
                )
            })
            .collect();
        files.sort();
        files
    }
}

// ============================================================================
// Default (dev) environment
// ============================================================================

#[test]
fn test_dev_writes_all_manifests() {
    let dir = TempDir::new().unwrap();
    let report = test_utils::generate(dir.path(), EnvironmentName::resolve(None));

    assert_eq!(report.count(FileAction::Written), 6);
    for file_name in [
        "deployment.json",
        "service.json",
        "ingress.json",
        "postgres-deployment.json",
        "postgres-service.json",
        "secret.json",
    ] {
        assert!(dir.path().join(file_name).exists(), "{} missing", file_name);
    }
}

#[test]
fn test_dev_deployment_and_service_ports() {
    let dir = TempDir::new().unwrap();
    test_utils::generate(dir.path(), EnvironmentName::Dev);

    let deployment = test_utils::read_json(dir.path(), "deployment.json");
    assert_eq!(deployment["apiVersion"], "apps/v1");
    assert_eq!(deployment["kind"], "Deployment");
    let container = &deployment["spec"]["template"]["spec"]["containers"][0];
    assert_eq!(container["ports"][0]["containerPort"], 3000);
    assert_eq!(container["startupProbe"], container["livenessProbe"]);
    assert_eq!(
        container["livenessProbe"]["httpGet"]["httpHeaders"][0]["value"],
        "rallly.localhost"
    );

    let service = test_utils::read_json(dir.path(), "service.json");
    assert_eq!(service["spec"]["ports"][0]["port"], 3000);
    assert_eq!(service["spec"]["ports"][0]["targetPort"], 3000);
}

#[test]
fn test_dev_ingress_has_no_tls() {
    let dir = TempDir::new().unwrap();
    test_utils::generate(dir.path(), EnvironmentName::Dev);

    let ingress = test_utils::read_json(dir.path(), "ingress.json");
    assert_eq!(ingress["spec"]["tls"], serde_json::json!([]));
    assert_eq!(ingress["metadata"]["annotations"], serde_json::json!({}));
    assert_eq!(ingress["spec"]["rules"][0]["host"], "rallly.localhost");
}

#[test]
fn test_dev_public_url_in_env() {
    let dir = TempDir::new().unwrap();
    test_utils::generate(dir.path(), EnvironmentName::Dev);

    let deployment = test_utils::read_json(dir.path(), "deployment.json");
    let env = deployment["spec"]["template"]["spec"]["containers"][0]["env"]
        .as_array()
        .unwrap();
    let base_url = env
        .iter()
        .find(|var| var["name"] == "NEXT_PUBLIC_BASE_URL")
        .unwrap();
    assert_eq!(base_url["value"], "http://rallly.localhost");
}

// ============================================================================
// Production environment
// ============================================================================

#[test]
fn test_production_ingress_has_tls() {
    let dir = TempDir::new().unwrap();
    test_utils::generate(dir.path(), EnvironmentName::Production);

    let ingress = test_utils::read_json(dir.path(), "ingress.json");
    let tls = ingress["spec"]["tls"].as_array().unwrap();
    assert_eq!(tls.len(), 1);
    assert_eq!(tls[0]["secretName"], "ingress-letsencrypt");
    assert_eq!(tls[0]["hosts"][0], "rallly.con2.fi");

    let annotations = &ingress["metadata"]["annotations"];
    assert_eq!(annotations["nginx.ingress.kubernetes.io/ssl-redirect"], "true");
    assert_eq!(annotations["cert-manager.io/cluster-issuer"], "letsencrypt-prod");
}

#[test]
fn test_production_deletes_stale_managed_files() {
    let dir = TempDir::new().unwrap();
    for file_name in ["postgres-deployment.json", "postgres-service.json", "secret.json"] {
        std::fs::write(dir.path().join(file_name), "stale").unwrap();
    }

    let report = test_utils::generate(dir.path(), EnvironmentName::Production);

    assert_eq!(report.count(FileAction::Deleted), 3);
    for file_name in ["postgres-deployment.json", "postgres-service.json", "secret.json"] {
        assert!(!dir.path().join(file_name).exists(), "{} not deleted", file_name);
    }
}

#[test]
fn test_production_without_stale_files_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let report = test_utils::generate(dir.path(), EnvironmentName::Production);

    assert_eq!(report.count(FileAction::Written), 3);
    assert_eq!(report.count(FileAction::Absent), 3);
    assert_eq!(test_utils::read_all(dir.path()).len(), 3);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_rerun_is_byte_identical() {
    for name in EnvironmentName::all() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();

        test_utils::generate(first.path(), *name);
        test_utils::generate(second.path(), *name);
        let before = test_utils::read_all(second.path());
        test_utils::generate(second.path(), *name);

        assert_eq!(test_utils::read_all(first.path()), before);
        assert_eq!(test_utils::read_all(second.path()), before);
    }
}

#[test]
fn test_output_is_two_space_indented_json() {
    let dir = TempDir::new().unwrap();
    test_utils::generate(dir.path(), EnvironmentName::Dev);

    let content = std::fs::read_to_string(dir.path().join("service.json")).unwrap();
    assert!(content.starts_with("{\n  \"apiVersion\""));
    assert!(content.contains("\n    \"name\": \"rallly\""));
}
