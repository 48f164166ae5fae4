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
use crate::infrastructure::kubernetes::resources::pod::stack_labels;
use crate::infrastructure::kubernetes::resources::postgres::managed_database_url;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use std::collections::BTreeMap;

/// Values stored in the stack secret. `ByteString` serializes as base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretValues {
    pub database_url: String,
    pub oidc_client_secret: String,
    pub oidc_client_id: String,
    pub secret_password: String,
}

impl SecretValues {
    /// Throwaway credentials for a self-contained development stack.
    pub fn insecure_defaults() -> Self {
        Self {
            database_url: managed_database_url(),
            oidc_client_secret: INSECURE_OIDC_CLIENT_SECRET.to_string(),
            oidc_client_id: INSECURE_OIDC_CLIENT_ID.to_string(),
            secret_password: INSECURE_SECRET_PASSWORD.to_string(),
        }
    }

    /// Empty values, to be filled in by hand. Never commit the filled result.
    pub fn empty() -> Self {
        Self {
            database_url: String::new(),
            oidc_client_secret: String::new(),
            oidc_client_id: String::new(),
            secret_password: String::new(),
        }
    }
}

pub struct SecretBuilder {
    values: SecretValues,
}

impl SecretBuilder {
    pub fn new(values: SecretValues) -> Self {
        Self { values }
    }

    pub fn build(&self) -> Secret {
        let mut data = BTreeMap::new();
        for (key, value) in [
            (SECRET_KEY_DATABASE_URL, &self.values.database_url),
            (SECRET_KEY_OIDC_CLIENT_SECRET, &self.values.oidc_client_secret),
            (SECRET_KEY_OIDC_CLIENT_ID, &self.values.oidc_client_id),
            (SECRET_KEY_SECRET_PASSWORD, &self.values.secret_password),
        ] {
            data.insert(key.to_string(), ByteString(value.as_bytes().to_vec()));
        }

        Secret {
            metadata: ObjectMeta {
                name: Some(STACK.to_string()),
                labels: Some(stack_labels(None)),
                ..Default::default()
            },
            type_: Some(SECRET_TYPE_OPAQUE.to_string()),
            data: Some(data),
            ..Default::default()
        }
    }
}
