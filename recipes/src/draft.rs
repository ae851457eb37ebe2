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
use std::str::FromStr;

use thiserror::Error;

use crate::{parse, Category, Recipe};

pub const VALIDATION_MESSAGE: &'static str = "Please fill in all required fields properly.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", VALIDATION_MESSAGE)]
pub struct ValidationError;

/// The fields of a draft recipe as they are named in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    CookingTime,
    ImageUrl,
    Category,
    Ingredients,
    Instructions,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::CookingTime => "cookingTime",
            Field::ImageUrl => "imageUrl",
            Field::Category => "category",
            Field::Ingredients => "ingredients",
            Field::Instructions => "instructions",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "title" => Field::Title,
            "description" => Field::Description,
            "cookingTime" => Field::CookingTime,
            "imageUrl" => Field::ImageUrl,
            "category" => Field::Category,
            "ingredients" => Field::Ingredients,
            "instructions" => Field::Instructions,
            _ => return Err(format!("Unknown field: {}", s)),
        })
    }
}

/// The raw, unvalidated contents of the new recipe form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftRecipe {
    pub title: String,
    pub description: String,
    pub cooking_time: String,
    pub image_url: String,
    pub category: Category,
    pub ingredients: String,
    pub instructions: String,
}

impl Default for DraftRecipe {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            cooking_time: String::new(),
            image_url: String::new(),
            category: Category::default(),
            ingredients: String::new(),
            instructions: String::new(),
        }
    }
}

impl DraftRecipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this draft with one field replaced.
    ///
    /// An unrecognized category leaves the current category in place.
    pub fn set_field<S: Into<String>>(&self, field: Field, value: S) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            Field::Title => next.title = value,
            Field::Description => next.description = value,
            Field::CookingTime => next.cooking_time = value,
            Field::ImageUrl => next.image_url = value,
            Field::Category => {
                if let Ok(category) = value.parse() {
                    next.category = category;
                }
            }
            Field::Ingredients => next.ingredients = value,
            Field::Instructions => next.instructions = value,
        }
        next
    }

    fn cooking_minutes(&self) -> Option<u32> {
        self.cooking_time
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|mins| *mins > 0)
    }

    /// Validate the draft and convert it into a publishable recipe.
    pub fn to_recipe(&self) -> Result<Recipe, ValidationError> {
        let ingredients = parse::as_ingredient_list(&self.ingredients);
        let instructions = parse::as_instructions(&self.instructions);
        if self.title.is_empty()
            || self.image_url.is_empty()
            || ingredients.is_empty()
            || instructions.is_empty()
        {
            return Err(ValidationError);
        }
        let cooking_time = self.cooking_minutes().ok_or(ValidationError)?;
        Ok(Recipe {
            title: self.title.clone(),
            description: self.description.clone(),
            cooking_time,
            image_url: self.image_url.clone(),
            category: self.category,
            ingredients,
            instructions,
        })
    }
}
