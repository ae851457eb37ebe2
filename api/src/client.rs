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
use async_trait::async_trait;
use chrono::Duration;
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use recipes::{DraftRecipe, FormEvent, ValidationError};

use crate::CreateRecipeRequest;

pub const MENU_PATH: &'static str = "/menu";
pub const LOGIN_PATH: &'static str = "/login";

pub fn default_redirect_delay() -> Duration {
    Duration::seconds(2)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Request(String),
}

/// Something that can publish a new recipe to the backend.
#[async_trait(?Send)]
pub trait RecipeClient {
    async fn create_recipe(&self, request: &CreateRecipeRequest) -> Result<(), SubmitError>;
}

pub trait Navigator {
    fn navigate(&self, path: &str);

    /// Navigate to `path` once `delay` has passed.
    fn navigate_after(&self, path: &str, delay: Duration);

    /// Drop any navigation scheduled with `navigate_after` that hasn't
    /// happened yet.
    fn cancel_pending(&self) {}
}

pub trait Session {
    fn is_authenticated(&self) -> bool;
}

/// Drives a single submission of the new recipe form.
pub struct Submission<'a, C, N>
where
    C: RecipeClient + ?Sized,
    N: Navigator + ?Sized,
{
    client: &'a C,
    navigator: &'a N,
    redirect_delay: Duration,
}

impl<'a, C, N> Submission<'a, C, N>
where
    C: RecipeClient + ?Sized,
    N: Navigator + ?Sized,
{
    pub fn new(client: &'a C, navigator: &'a N) -> Self {
        Self {
            client,
            navigator,
            redirect_delay: default_redirect_delay(),
        }
    }

    pub fn with_redirect_delay(mut self, delay: Duration) -> Self {
        self.redirect_delay = delay;
        self
    }

    /// Submit the draft, reporting each state change through `emit`.
    ///
    /// `emit` sees `Started` first and `Finished` last. In between it sees
    /// exactly one of `Succeeded` or `Failed`.
    #[instrument(skip_all, fields(title = %draft.title))]
    pub async fn run<F>(&self, draft: &DraftRecipe, mut emit: F) -> Result<(), SubmitError>
    where
        F: FnMut(FormEvent),
    {
        emit(FormEvent::Started);
        let result = self.attempt(draft).await;
        match &result {
            Ok(()) => {
                info!("Recipe created");
                emit(FormEvent::Succeeded);
                self.navigator.navigate_after(MENU_PATH, self.redirect_delay);
            }
            Err(err) => {
                error!(?err, "Unable to create recipe");
                emit(FormEvent::Failed(err.to_string()));
            }
        }
        emit(FormEvent::Finished);
        result
    }

    async fn attempt(&self, draft: &DraftRecipe) -> Result<(), SubmitError> {
        let recipe = draft.to_recipe()?;
        debug!(
            ingredients = recipe.ingredients.len(),
            steps = recipe.instructions.len(),
            "Draft is valid"
        );
        self.client
            .create_recipe(&CreateRecipeRequest::from(recipe))
            .await
    }
}
