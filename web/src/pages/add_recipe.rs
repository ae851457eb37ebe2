// Copyright 2022 Jeremy Wall (Jeremy@marzhilsltudios.com)
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

use client_api::{Navigator, RecipeClient, Session};
use recipes::FormState;

use crate::api::{HttpStore, PageClient};
use crate::app_state::get_state_handler;
use crate::components::{AccessDenied, Header, RecipeForm};
use crate::config::AppConfig;

#[derive(Prop)]
pub struct AddRecipePageProps {
    pub session: Rc<dyn Session>,
    pub navigator: Rc<dyn Navigator>,
}

#[instrument(skip_all)]
#[component]
pub fn AddRecipePage<G: Html>(cx: Scope, props: AddRecipePageProps) -> View<G> {
    let AddRecipePageProps { session, navigator } = props;
    if !session.is_authenticated() {
        info!("No session so the recipe form stays hidden");
        return view! {cx,
            AccessDenied(navigator=navigator)
        };
    }

    let config = AppConfig::get_from_context(cx);
    let sh = get_state_handler(cx, FormState::new());
    let page_client = Rc::new(PageClient::new(HttpStore::get_from_context(cx)));
    on_cleanup(cx, {
        let page_client = page_client.clone();
        let navigator = navigator.clone();
        move || {
            page_client.abort();
            navigator.cancel_pending();
        }
    });
    let client: Rc<dyn RecipeClient> = page_client;

    view! {cx,
        div(class="add-recipe") {
            Header(title="Add New Recipe", tagline="Share your culinary masterpiece with the world")
            RecipeForm(
                sh=sh,
                client=client,
                navigator=navigator,
                redirect_delay=config.redirect_delay,
            )
        }
    }
}
