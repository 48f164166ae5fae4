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

use crate::infrastructure::constants::{LABEL_COMPONENT, LABEL_STACK, STACK};
use std::collections::BTreeMap;

/// Stack labels, with the component label only when a component is given.
pub fn stack_labels(component: Option<&str>) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(LABEL_STACK.to_string(), STACK.to_string());
    if let Some(component) = component {
        labels.insert(LABEL_COMPONENT.to_string(), component.to_string());
    }
    labels
}

pub trait LabeledResourceBuilder {
    fn component_name(&self) -> Option<&str>;

    fn get_labels(&self) -> BTreeMap<String, String> {
        stack_labels(self.component_name())
    }

    fn get_selector_labels(&self) -> BTreeMap<String, String> {
        self.get_labels()
    }
}
