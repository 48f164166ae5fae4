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

use crate::domain::config::EnvironmentName;
use crate::infrastructure::manifest::set::ManifestSet;
use crate::infrastructure::manifest::store::{FsManifestStore, ManifestStore};
use crate::shared::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    /// Written, replacing any previous content.
    Written,
    /// Unwanted and removed.
    Deleted,
    /// Unwanted and already missing.
    Absent,
}

impl FileAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileAction::Written => "written",
            FileAction::Deleted => "deleted",
            FileAction::Absent => "absent",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub file_name: &'static str,
    pub location: String,
    pub action: FileAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaterializeReport {
    pub environment: Option<EnvironmentName>,
    pub outcomes: Vec<FileOutcome>,
}

impl MaterializeReport {
    pub fn action_of(&self, file_name: &str) -> Option<FileAction> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.file_name == file_name)
            .map(|outcome| outcome.action)
    }

    pub fn count(&self, action: FileAction) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }
}

/// Make the presence of `file_name` match `content`: write it when there is
/// content, otherwise delete it if it exists.
pub fn reconcile<S: ManifestStore + ?Sized>(
    store: &S,
    file_name: &str,
    content: Option<&str>,
) -> Result<FileAction> {
    match content {
        Some(content) => {
            store.write(file_name, content)?;
            tracing::info!("Wrote {}", store.describe(file_name));
            Ok(FileAction::Written)
        }
        None if store.exists(file_name) => {
            store.delete(file_name)?;
            tracing::info!("Deleted {}", store.describe(file_name));
            Ok(FileAction::Deleted)
        }
        None => {
            tracing::debug!("{} not present, nothing to delete", store.describe(file_name));
            Ok(FileAction::Absent)
        }
    }
}

pub struct ManifestWriter<S: ManifestStore> {
    store: S,
}

impl ManifestWriter<FsManifestStore> {
    pub fn to_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(FsManifestStore::new(dir))
    }
}

impl<S: ManifestStore> ManifestWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Render every document first, then reconcile the files in set order.
    /// A failure part way leaves earlier files in place.
    pub fn materialize(&self, set: &ManifestSet) -> Result<MaterializeReport> {
        let rendered = set
            .entries()
            .iter()
            .map(|entry| -> Result<_> { Ok((entry.file_name, entry.render()?)) })
            .collect::<Result<Vec<_>>>()?;

        let mut outcomes = Vec::with_capacity(rendered.len());
        for (file_name, content) in rendered {
            let action = reconcile(&self.store, file_name, content.as_deref())?;
            outcomes.push(FileOutcome {
                file_name,
                location: self.store.describe(file_name),
                action,
            });
        }

        Ok(MaterializeReport {
            environment: set.environment(),
            outcomes,
        })
    }
}
