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

//! Named deployment environments and their compiled-in configuration.

use crate::infrastructure::constants::OIDC_DISCOVERY_PATH;
use crate::shared::error::{ManifestError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentName {
    #[default]
    Dev,
    Production,
}

impl EnvironmentName {
    const ALL: [EnvironmentName; 2] = [EnvironmentName::Dev, EnvironmentName::Production];

    pub fn all() -> &'static [EnvironmentName] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentName::Dev => "dev",
            EnvironmentName::Production => "production",
        }
    }

    /// Resolve a selector, falling back to the default environment when the
    /// selector is absent, empty or unknown.
    pub fn resolve(selector: Option<&str>) -> Self {
        match selector {
            None | Some("") => Self::default(),
            Some(name) => name.parse().unwrap_or_else(|_| {
                let fallback = Self::default();
                tracing::warn!(
                    "Unknown environment '{}', falling back to '{}'",
                    name,
                    fallback
                );
                fallback
            }),
        }
    }

    /// Like [`EnvironmentName::resolve`], but an unknown non-empty selector
    /// is an error.
    pub fn resolve_strict(selector: Option<&str>) -> Result<Self> {
        match selector {
            None | Some("") => Ok(Self::default()),
            Some(name) => name.parse(),
        }
    }

    pub fn config(&self) -> EnvironmentConfig {
        EnvironmentConfig::for_name(*self)
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentName {
    type Err = ManifestError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "dev" => Ok(EnvironmentName::Dev),
            "production" => Ok(EnvironmentName::Production),
            _ => Err(ManifestError::unknown_environment(s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    pub name: EnvironmentName,
    pub hostname: &'static str,
    pub secret_managed: bool,
    pub postgres_managed: bool,
    pub kompassi_base_url: &'static str,
    pub tls_enabled: bool,
}

impl EnvironmentConfig {
    pub fn for_name(name: EnvironmentName) -> Self {
        match name {
            EnvironmentName::Dev => Self {
                name,
                hostname: "rallly.localhost",
                secret_managed: true,
                postgres_managed: true,
                kompassi_base_url: "https://dev.kompassi.eu",
                tls_enabled: false,
            },
            EnvironmentName::Production => Self {
                name,
                hostname: "rallly.con2.fi",
                secret_managed: false,
                postgres_managed: false,
                kompassi_base_url: "https://kompassi.eu",
                tls_enabled: true,
            },
        }
    }

    pub fn protocol(&self) -> &'static str {
        if self.tls_enabled {
            "https"
        } else {
            "http"
        }
    }

    pub fn public_url(&self) -> String {
        format!("{}://{}", self.protocol(), self.hostname)
    }

    pub fn oidc_discovery_url(&self) -> String {
        format!("{}{}", self.kompassi_base_url, OIDC_DISCOVERY_PATH)
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::for_name(EnvironmentName::default())
    }
}
