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
pub mod controller;

use async_trait::async_trait;
use thiserror::Error;

use api::{Failure, RecipePayload};
use recipes::{Item, Recipe, ValidationError};

pub use controller::{ItemController, RecipeController};

/// Failures from talking to the api. Display is the message shown to the
/// user, so `Status` carries the server's text when it sent one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Decode(String),
}

impl StoreError {
    pub fn status<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

impl From<Failure> for StoreError {
    fn from(failure: Failure) -> Self {
        Self::status(failure.status, failure.message)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

// NOTE(jwall): The browser runs everything on one thread and the http
// futures are not Send so neither are these.
#[async_trait(?Send)]
/// Define the shared interface to use for interacting with a store of recipes.
pub trait RecipeStore {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError>;
    /// Fetch one recipe. A missing recipe is `Ok(None)`.
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError>;
    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, StoreError>;
    async fn update_recipe(&self, id: &str, payload: &RecipePayload)
        -> Result<Recipe, StoreError>;
    async fn set_starred(&self, id: &str, starred: bool) -> Result<Recipe, StoreError>;
}

#[async_trait(?Send)]
pub trait ItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError>;
    async fn create_item(&self, text: &str) -> Result<Item, StoreError>;
}

#[cfg(test)]
mod tests;
