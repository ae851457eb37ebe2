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
use tracing::info;

use client_api::{Navigator, LOGIN_PATH};

#[derive(Prop)]
pub struct AccessDeniedProps {
    pub navigator: Rc<dyn Navigator>,
}

#[component]
pub fn AccessDenied<G: Html>(cx: Scope, props: AccessDeniedProps) -> View<G> {
    let navigator = props.navigator;
    view! {cx,
        div(class="access-denied") {
            h2 { "Access Denied" }
            p { "You must be logged in to add a recipe." }
            button(on:click=move |_| {
                info!("Sending user to login");
                navigator.navigate(LOGIN_PATH);
            }) { "Log In" }
        }
    }
}
