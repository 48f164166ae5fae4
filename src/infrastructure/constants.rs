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

/// Stack identity
pub const STACK: &str = "rallly";

/// Application (Next.js) service
pub const APP_NAME: &str = "rallly";
pub const APP_IMAGE: &str = "lukevella/rallly:latest";
pub const APP_PORT: i32 = 3000;

/// Probe settings
pub const PROBE_PATH: &str = "/";
pub const PROBE_HOST_HEADER: &str = "host";

/// Pod security context
pub const RUN_AS_USER: i64 = 1000;
pub const RUN_AS_GROUP: i64 = 1000;
pub const FS_GROUP: i64 = 1000;

/// PostgreSQL (only deployed when the database is managed by us)
pub const POSTGRES_NAME: &str = "postgres";
pub const POSTGRES_IMAGE: &str = "postgres:15";
pub const POSTGRES_PORT: i32 = 5432;
pub const POSTGRES_REPLICAS: i32 = 1;
pub const INSECURE_POSTGRES_PASSWORD: &str = "postgres";

/// Ingress and TLS
pub const CLUSTER_ISSUER: &str = "letsencrypt-prod";
pub const TLS_SECRET_NAME: &str = "ingress-letsencrypt";
pub const INGRESS_PATH: &str = "/";
pub const INGRESS_PATH_TYPE: &str = "Prefix";
pub const ANNOTATION_CLUSTER_ISSUER: &str = "cert-manager.io/cluster-issuer";
pub const ANNOTATION_SSL_REDIRECT: &str = "nginx.ingress.kubernetes.io/ssl-redirect";

/// Resource labels
pub const LABEL_STACK: &str = "stack";
pub const LABEL_COMPONENT: &str = "component";

/// Secret
pub const SECRET_TYPE_OPAQUE: &str = "Opaque";
pub const SECRET_KEY_DATABASE_URL: &str = "DATABASE_URL";
pub const SECRET_KEY_OIDC_CLIENT_SECRET: &str = "OIDC_CLIENT_SECRET";
pub const SECRET_KEY_OIDC_CLIENT_ID: &str = "OIDC_CLIENT_ID";
pub const SECRET_KEY_SECRET_PASSWORD: &str = "SECRET_PASSWORD";

/// Placeholder credentials, never valid outside local development
pub const INSECURE_OIDC_CLIENT_SECRET: &str = "kompassi_insecure_test_client_secret";
pub const INSECURE_OIDC_CLIENT_ID: &str = "kompassi_insecure_test_client_id";
pub const INSECURE_SECRET_PASSWORD: &str = "eeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee";

/// Application settings
pub const SUPPORT_EMAIL: &str = "tekniikka@tracon.fi";
pub const SMTP_HOST: &str = "mailer.b2.fi";
pub const SMTP_TLS_ENABLED: bool = true;
pub const OIDC_NAME: &str = "Kompassi";
pub const OIDC_DISCOVERY_PATH: &str = "/oidc/.well-known/openid-configuration/";

/// Output file names
pub const DEPLOYMENT_FILE: &str = "deployment.json";
pub const SERVICE_FILE: &str = "service.json";
pub const INGRESS_FILE: &str = "ingress.json";
pub const POSTGRES_DEPLOYMENT_FILE: &str = "postgres-deployment.json";
pub const POSTGRES_SERVICE_FILE: &str = "postgres-service.json";
pub const SECRET_FILE: &str = "secret.json";

/// Environment selector
pub const ENV_VAR_ENVIRONMENT: &str = "ENV";
