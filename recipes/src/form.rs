// Copyright 2021 Jeremy Wall
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
use crate::draft::{DraftRecipe, Field};

/// Everything the new recipe form tracks between renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub draft: DraftRecipe,
    pub loading: bool,
    pub error: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetField(Field, String),
    /// A submission has begun and is waiting on validation or the network.
    Started,
    Failed(String),
    Succeeded,
    /// The submission attempt is over, whatever its outcome.
    Finished,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, event: FormEvent) -> Self {
        let mut next = self.clone();
        match event {
            FormEvent::SetField(field, value) => {
                next.draft = self.draft.set_field(field, value);
            }
            FormEvent::Started => {
                next.loading = true;
                next.error = None;
                next.success = false;
            }
            FormEvent::Failed(msg) => {
                next.error = Some(msg);
                next.success = false;
            }
            FormEvent::Succeeded => {
                next.error = None;
                next.success = true;
            }
            FormEvent::Finished => {
                next.loading = false;
            }
        }
        next
    }

    pub fn submit_disabled(&self) -> bool {
        self.loading
    }
}
