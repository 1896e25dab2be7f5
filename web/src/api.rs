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
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use client_api::*;
use recipe_store::{ItemStore, RecipeStore, StoreError};
use recipes::{Item, Recipe};

fn transport_error(err: gloo_net::Error) -> StoreError {
    StoreError::Transport(format!("{}", err))
}

fn decode_error(err: gloo_net::Error) -> StoreError {
    StoreError::Decode(format!("{}", err))
}

fn status_error(resp: &Response) -> StoreError {
    Failure::from_read(resp.status()).into()
}

/// Builds the error for a failed write, preferring the server's own message.
async fn failure(resp: Response, fallback: &str) -> StoreError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let failure = Failure::from_write(status, &body, fallback);
    error!(status, reason = %failure.message, "Request was unsuccessful");
    failure.into()
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, StoreError> {
    debug!("We got a valid response back!");
    resp.json::<T>().await.map_err(decode_error)
}

#[derive(Clone, Debug)]
pub struct HttpStore {
    paths: Paths,
}

impl HttpStore {
    pub fn new<S: Into<String>>(root: S) -> Self {
        Self {
            paths: Paths::new(root),
        }
    }
}

#[async_trait(?Send)]
impl RecipeStore for HttpStore {
    #[instrument]
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let path = self.paths.recipes();
        let resp = Request::get(&path).send().await.map_err(transport_error)?;
        if !resp.ok() {
            return Err(status_error(&resp));
        }
        read_json(resp).await
    }

    #[instrument]
    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let path = self.paths.recipe(id);
        let resp = Request::get(&path).send().await.map_err(transport_error)?;
        match Lookup::from_status(resp.status()) {
            Lookup::Found => Ok(Some(read_json(resp).await?)),
            Lookup::Missing => {
                debug!("Recipe doesn't exist");
                Ok(None)
            }
            Lookup::Failed => Err(status_error(&resp)),
        }
    }

    #[instrument(skip(payload), fields(name=%payload.draft.name))]
    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, StoreError> {
        let path = self.paths.recipes();
        let resp = Request::post(&path)
            .json(payload)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(failure(resp, SAVE_RECIPE_FAILED).await);
        }
        read_json(resp).await
    }

    #[instrument(skip(payload))]
    async fn update_recipe(
        &self,
        id: &str,
        payload: &RecipePayload,
    ) -> Result<Recipe, StoreError> {
        let path = self.paths.recipe(id);
        let resp = Request::put(&path)
            .json(payload)
            .map_err(decode_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(failure(resp, SAVE_RECIPE_FAILED).await);
        }
        read_json(resp).await
    }

    #[instrument]
    async fn set_starred(&self, id: &str, starred: bool) -> Result<Recipe, StoreError> {
        let path = self.paths.recipe_star(id);
        let resp = Request::patch(&path)
            .json(&StarRequest { starred })
            .map_err(decode_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            error!(status = resp.status(), "Star toggle was unsuccessful");
            return Err(Failure::from_star(resp.status()).into());
        }
        read_json(resp).await
    }
}

#[async_trait(?Send)]
impl ItemStore for HttpStore {
    #[instrument]
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let path = self.paths.items();
        let resp = Request::get(&path).send().await.map_err(transport_error)?;
        if !resp.ok() {
            return Err(status_error(&resp));
        }
        read_json(resp).await
    }

    #[instrument]
    async fn create_item(&self, text: &str) -> Result<Item, StoreError> {
        let path = self.paths.items();
        let resp = Request::post(&path)
            .json(&NewItem::new(text))
            .map_err(decode_error)?
            .send()
            .await
            .map_err(transport_error)?;
        if !resp.ok() {
            return Err(failure(resp, ADD_ITEM_FAILED).await);
        }
        read_json(resp).await
    }
}
