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

use sycamore::prelude::*;
use tracing::{info, instrument};

use client_api::{Navigator, Session};

use crate::api::HttpStore;
use crate::config::AppConfig;
use crate::navigation::BrowserNavigator;
use crate::pages::*;
use crate::session::StorageSession;

#[instrument(skip_all)]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = AppConfig::from_build_env();
    info!(api_root = config.api_root.as_str(), "Starting UI");
    HttpStore::provide_context(cx, config.api_root.clone());
    AppConfig::provide_context(cx, config);

    let session: Rc<dyn Session> = Rc::new(StorageSession::load());
    let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator::new());

    view! {cx,
        div(class="app") {
            AddRecipePage(session=session, navigator=navigator)
        }
    }
}
