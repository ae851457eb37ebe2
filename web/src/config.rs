// Copyright 2022 Jeremy Wall
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
use std::rc::Rc;

use chrono::Duration;
use sycamore::prelude::*;

pub const DEFAULT_API_ROOT: &'static str = "http://localhost:3000";

/// Settings baked into the wasm bundle at build time.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_root: String,
    pub redirect_delay: Duration,
}

impl AppConfig {
    /// Reads `RECIPE_API_ROOT` from the build environment, falling back to the
    /// local development backend.
    pub fn from_build_env() -> Self {
        let api_root = option_env!("RECIPE_API_ROOT").unwrap_or(DEFAULT_API_ROOT);
        Self {
            api_root: api_root.trim_end_matches('/').to_owned(),
            redirect_delay: client_api::default_redirect_delay(),
        }
    }

    pub fn provide_context(cx: Scope, config: Self) {
        provide_context(cx, Rc::new(config));
    }

    pub fn get_from_context(cx: Scope) -> Rc<Self> {
        use_context::<Rc<Self>>(cx).clone()
    }
}
