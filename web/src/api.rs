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

use async_trait::async_trait;
use gloo_net::http;
use sycamore::prelude::*;
use tracing::{debug, error, instrument};
use wasm_bindgen::JsValue;
use web_sys::AbortController;

use client_api::*;

#[derive(Debug)]
pub struct Error(String);

impl From<JsValue> for Error {
    fn from(item: JsValue) -> Self {
        Error(format!("{:?}", item))
    }
}

impl From<gloo_net::Error> for Error {
    fn from(item: gloo_net::Error) -> Self {
        Error(format!("{}", item))
    }
}

impl From<Error> for SubmitError {
    fn from(item: Error) -> Self {
        SubmitError::Request(item.0)
    }
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    root: String,
}

impl HttpStore {
    pub fn new(root: String) -> Self {
        Self { root }
    }

    pub fn recipes_path(&self) -> String {
        let mut path = self.root.clone();
        path.push_str(RECIPES_PATH);
        path
    }

    pub fn provide_context<S: Into<String>>(cx: Scope, root: S) {
        provide_context(cx, Rc::new(Self::new(root.into())));
    }

    pub fn get_from_context(cx: Scope) -> Rc<Self> {
        use_context::<Rc<Self>>(cx).clone()
    }

    // NOTE: No Authorization header is attached. The backend identifies the
    // user from the browser's own credentials.
    #[instrument(skip_all, fields(?self, title = %recipe.title))]
    pub async fn create_recipe(
        &self,
        recipe: &CreateRecipeRequest,
        abort: Option<&web_sys::AbortSignal>,
    ) -> Result<(), SubmitError> {
        let path = self.recipes_path();
        let resp = http::Request::post(&path)
            .header("Content-Type", "application/json")
            .abort_signal(abort)
            .json(recipe)
            .map_err(Error::from)?
            .send()
            .await
            .map_err(Error::from)?;
        let body = resp.text().await.map_err(Error::from)?;
        debug!(status = resp.status(), "Got a response back");
        Ok(read_create_response(resp.ok(), &body)?)
    }
}

/// A recipe client bound to the lifetime of a single page. Aborting it
/// cancels any request still in flight.
pub struct PageClient {
    store: Rc<HttpStore>,
    controller: Option<AbortController>,
}

impl PageClient {
    pub fn new(store: Rc<HttpStore>) -> Self {
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                error!(err = ?Error::from(err), "Requests for this page can not be aborted");
                None
            }
        };
        Self { store, controller }
    }

    pub fn abort(&self) {
        if let Some(controller) = &self.controller {
            debug!("Aborting in flight requests");
            controller.abort();
        }
    }
}

#[async_trait(?Send)]
impl RecipeClient for PageClient {
    async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<(), SubmitError> {
        let signal = self.controller.as_ref().map(AbortController::signal);
        self.store.create_recipe(request, signal.as_ref()).await
    }
}
