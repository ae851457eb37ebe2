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
pub mod draft;
pub mod form;
pub mod parse;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use draft::{DraftRecipe, Field, ValidationError, VALIDATION_MESSAGE};
pub use form::{FormEvent, FormState};

/// The fixed set of categories a recipe can be filed under.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    Drink,
}

impl Category {
    /// Every category in the order the form offers them.
    pub const ALL: [Category; 6] = [
        Category::Breakfast,
        Category::Lunch,
        Category::Dinner,
        Category::Dessert,
        Category::Snack,
        Category::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Snack => "Snack",
            Category::Drink => "Drink",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Dinner
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, w: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(w, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// A single step of a recipe's instructions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub step: String,
}

impl Instruction {
    pub fn new<S: Into<String>>(step: S) -> Self {
        Self { step: step.into() }
    }
}

/// A Recipe that has passed validation and is ready to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub cooking_time: u32,
    pub image_url: String,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub instructions: Vec<Instruction>,
}

#[cfg(test)]
mod test;
