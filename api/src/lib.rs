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
use serde::{Deserialize, Serialize};
use serde_json::Value;

use recipes::{Category, Instruction, Recipe};

pub mod client;

pub use client::*;

/// Path of the recipe collection relative to the api root.
pub const RECIPES_PATH: &'static str = "/recipes";

pub const CREATE_FAILED_MESSAGE: &'static str = "Failed to create recipe";

/// The JSON body posted to the recipe collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub title: String,
    pub description: String,
    pub cooking_time: u32,
    pub image_url: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<Instruction>,
}

impl From<Recipe> for CreateRecipeRequest {
    fn from(recipe: Recipe) -> Self {
        let Recipe {
            title,
            description,
            cooking_time,
            image_url,
            category,
            ingredients,
            instructions,
        } = recipe;
        Self {
            title,
            description,
            cooking_time,
            image_url,
            category,
            ingredients,
            instructions,
        }
    }
}

/// The parts of a failed response body we care about. The backend is free to
/// send anything else alongside it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: Option<String>,
}

impl From<&Value> for ErrorResponse {
    fn from(body: &Value) -> Self {
        Self {
            message: body
                .get("message")
                .and_then(Value::as_str)
                .filter(|msg| !msg.is_empty())
                .map(str::to_owned),
        }
    }
}

impl ErrorResponse {
    pub fn into_message(self) -> String {
        self.message
            .unwrap_or_else(|| CREATE_FAILED_MESSAGE.to_owned())
    }
}

/// Interpret the body of a create recipe response.
///
/// The body must be JSON whatever the status was. A non-success status turns
/// into a request error carrying the server's message when it sent one.
pub fn read_create_response(ok: bool, body: &str) -> Result<(), SubmitError> {
    let data: Value = serde_json::from_str(body)
        .map_err(|e| SubmitError::Request(format!("Unparseable response: {}", e)))?;
    if !ok {
        return Err(SubmitError::Request(
            ErrorResponse::from(&data).into_message(),
        ));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserData {
    pub user_id: String,
}

#[cfg(test)]
mod test;
