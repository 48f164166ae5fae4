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

//! Environment variable builder for the application container
//!
//! Entries keep their declaration order; literal values are rendered to
//! strings and secret entries become `secretKeyRef`s into the stack secret.

use crate::domain::config::EnvironmentConfig;
use crate::infrastructure::constants::*;
use k8s_openapi::api::core::v1::{EnvVar, EnvVarSource, SecretKeySelector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvValue {
    Literal(String),
    Secret(&'static str),
}

impl EnvValue {
    pub fn literal(value: impl ToString) -> Self {
        EnvValue::Literal(value.to_string())
    }
}

pub struct EnvironmentBuilder {
    secret_name: String,
    vars: Vec<(String, EnvValue)>,
}

impl EnvironmentBuilder {
    pub fn new(secret_name: impl Into<String>) -> Self {
        Self {
            secret_name: secret_name.into(),
            vars: Vec::new(),
        }
    }

    /// The full variable set for the Rallly container in `config`.
    pub fn for_app(config: &EnvironmentConfig) -> Self {
        Self::new(STACK)
            .with_var("PORT", EnvValue::literal(APP_PORT))
            .with_var(SECRET_KEY_DATABASE_URL, EnvValue::Secret(SECRET_KEY_DATABASE_URL))
            .with_var(SECRET_KEY_SECRET_PASSWORD, EnvValue::Secret(SECRET_KEY_SECRET_PASSWORD))
            .with_var("NEXT_PUBLIC_BASE_URL", EnvValue::literal(config.public_url()))
            .with_var("SUPPORT_EMAIL", EnvValue::literal(SUPPORT_EMAIL))
            .with_var("SMTP_HOST", EnvValue::literal(SMTP_HOST))
            .with_var("SMTP_TLS_ENABLED", EnvValue::literal(SMTP_TLS_ENABLED))
            .with_var("OIDC_NAME", EnvValue::literal(OIDC_NAME))
            .with_var("OIDC_DISCOVERY_URL", EnvValue::literal(config.oidc_discovery_url()))
            .with_var(SECRET_KEY_OIDC_CLIENT_ID, EnvValue::Secret(SECRET_KEY_OIDC_CLIENT_ID))
            .with_var(
                SECRET_KEY_OIDC_CLIENT_SECRET,
                EnvValue::Secret(SECRET_KEY_OIDC_CLIENT_SECRET),
            )
    }

    /// Set `name`, replacing an earlier entry of the same name in place.
    pub fn with_var(mut self, name: impl Into<String>, value: EnvValue) -> Self {
        let name = name.into();
        match self.vars.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.vars.push((name, value)),
        }
        self
    }

    pub fn build(self) -> Vec<EnvVar> {
        let secret_name = self.secret_name;
        self.vars
            .into_iter()
            .map(|(name, value)| match value {
                EnvValue::Literal(value) => EnvVar {
                    name,
                    value: Some(value),
                    ..Default::default()
                },
                EnvValue::Secret(key) => EnvVar {
                    name,
                    value_from: Some(EnvVarSource {
                        secret_key_ref: Some(SecretKeySelector {
                            name: secret_name.clone(),
                            key: key.to_string(),
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_literal_values_are_stringified() {
        let env = EnvironmentBuilder::for_app(&EnvironmentConfig::default()).build();

        let port = env.iter().find(|v| v.name == "PORT").unwrap();
        assert_eq!(port.value.as_deref(), Some("3000"));
        assert!(port.value_from.is_none());

        let smtp_tls = env.iter().find(|v| v.name == "SMTP_TLS_ENABLED").unwrap();
        assert_eq!(smtp_tls.value.as_deref(), Some("true"));
    }

    #[test]
    fn test_secret_values_reference_stack_secret() {
        let env = EnvironmentBuilder::for_app(&EnvironmentConfig::default()).build();

        let secret_vars: Vec<_> = env.iter().filter(|v| v.value_from.is_some()).collect();
        assert_eq!(secret_vars.len(), 4);

        for var in secret_vars {
            assert!(var.value.is_none());
            let selector = var
                .value_from
                .as_ref()
                .and_then(|source| source.secret_key_ref.as_ref())
                .unwrap();
            assert_eq!(selector.name, STACK);
            assert_eq!(selector.key, var.name);
        }
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let env = EnvironmentBuilder::for_app(&EnvironmentConfig::default()).build();
        let names: Vec<_> = env.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "PORT",
                "DATABASE_URL",
                "SECRET_PASSWORD",
                "NEXT_PUBLIC_BASE_URL",
                "SUPPORT_EMAIL",
                "SMTP_HOST",
                "SMTP_TLS_ENABLED",
                "OIDC_NAME",
                "OIDC_DISCOVERY_URL",
                "OIDC_CLIENT_ID",
                "OIDC_CLIENT_SECRET",
            ]
        );
    }

    #[test]
    fn test_no_duplicate_names() {
        let env = EnvironmentBuilder::new("s")
            .with_var("A", EnvValue::literal(1))
            .with_var("B", EnvValue::Secret("B"))
            .with_var("A", EnvValue::literal(2))
            .build();

        let unique: HashSet<_> = env.iter().map(|v| v.name.clone()).collect();
        assert_eq!(unique.len(), env.len());
        assert_eq!(env[0].name, "A");
        assert_eq!(env[0].value.as_deref(), Some("2"));
    }
}
