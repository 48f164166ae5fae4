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

use crate::shared::error::{ManifestError, Result};
use std::io::ErrorKind;
use std::path::PathBuf;

/// Where manifest files live. File names are flat, relative to the store.
pub trait ManifestStore {
    fn exists(&self, file_name: &str) -> bool;

    /// Create or fully overwrite `file_name`.
    fn write(&self, file_name: &str, content: &str) -> Result<()>;

    /// Remove `file_name`; a missing file is not an error.
    fn delete(&self, file_name: &str) -> Result<()>;

    fn describe(&self, file_name: &str) -> String {
        file_name.to_string()
    }
}

pub struct FsManifestStore {
    root: PathBuf,
}

impl FsManifestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

impl Default for FsManifestStore {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ManifestStore for FsManifestStore {
    fn exists(&self, file_name: &str) -> bool {
        self.path_of(file_name).exists()
    }

    fn write(&self, file_name: &str, content: &str) -> Result<()> {
        let path = self.path_of(file_name);
        std::fs::write(&path, content).map_err(|e| ManifestError::io("write", path, e))
    }

    fn delete(&self, file_name: &str) -> Result<()> {
        let path = self.path_of(file_name);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ManifestError::io("delete", path, e)),
        }
    }

    fn describe(&self, file_name: &str) -> String {
        self.path_of(file_name).display().to_string()
    }
}
