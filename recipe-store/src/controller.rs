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
use tracing::{debug, error, instrument};

use api::RecipePayload;
use recipes::{item_text, Item, ItemList, Recipe, RecipeForm, RecipeWidget};

use crate::{ItemStore, RecipeStore, SaveError, StoreError};

#[instrument(skip_all)]
pub async fn load_recipes<S: RecipeStore + ?Sized>(store: &S) -> Result<Vec<Recipe>, StoreError> {
    let recipes = store.list_recipes().await?;
    debug!(count = recipes.len(), "Loaded recipes");
    Ok(recipes)
}

/// Validates the form, submits it, and returns the fresh recipe listing.
/// Validation failures never reach the store.
#[instrument(skip_all, fields(editing=?form.editing_id()))]
pub async fn save_recipe<S: RecipeStore + ?Sized>(
    store: &S,
    form: &RecipeForm,
) -> Result<Vec<Recipe>, SaveError> {
    let draft = form.validate()?;
    match form.editing_id() {
        Some(id) => {
            store
                .update_recipe(id, &RecipePayload::update(draft, form.starred()))
                .await?;
        }
        None => {
            store.create_recipe(&RecipePayload::create(draft)).await?;
        }
    }
    debug!("Recipe saved, refreshing list");
    Ok(store.list_recipes().await?)
}

#[instrument(skip_all, fields(id=%recipe.id, starred=!recipe.starred))]
pub async fn toggle_star<S: RecipeStore + ?Sized>(
    store: &S,
    recipe: &Recipe,
) -> Result<Recipe, StoreError> {
    store.set_starred(&recipe.id, !recipe.starred).await
}

#[instrument(skip_all)]
pub async fn load_items<S: ItemStore + ?Sized>(store: &S) -> Result<Vec<Item>, StoreError> {
    store.list_items().await
}

/// Adds an item and returns the refreshed list. Blank input is ignored and
/// yields `Ok(None)` without a request.
#[instrument(skip(store))]
pub async fn add_item<S: ItemStore + ?Sized>(
    store: &S,
    input: &str,
) -> Result<Option<Vec<Item>>, StoreError> {
    let text = match item_text(input) {
        Some(text) => text,
        None => return Ok(None),
    };
    store.create_item(&text).await?;
    Ok(Some(store.list_items().await?))
}

/// Folds a finished save into the widget for the dialog session that started
/// it. Failures land in that dialog's inline error.
pub fn finish_save(
    state: &mut RecipeWidget,
    session: u64,
    result: Result<Vec<Recipe>, SaveError>,
) -> Result<(), SaveError> {
    match result {
        Ok(recipes) => {
            if !state.saved(session, recipes) {
                debug!(session, "Saved dialog was already closed");
            }
            Ok(())
        }
        Err(err) => {
            error!(?err, session, "Unable to save recipe");
            state.save_failed(session, err.to_string());
            Err(err)
        }
    }
}

/// Applies a confirmed star change. On failure the widget is left alone.
pub fn finish_star(
    state: &mut RecipeWidget,
    result: Result<Recipe, StoreError>,
) -> Result<bool, StoreError> {
    match result {
        Ok(updated) => Ok(state.starred(updated)),
        Err(err) => {
            error!(?err, "Unable to toggle star");
            Err(err)
        }
    }
}

/// Applies the outcome of `add_item`. Returns whether the list changed.
pub fn finish_add_item(
    items: &mut ItemList,
    result: Result<Option<Vec<Item>>, StoreError>,
) -> Result<bool, StoreError> {
    match result {
        Ok(Some(fresh)) => {
            items.replace(fresh);
            Ok(true)
        }
        Ok(None) => Ok(false),
        Err(err) => {
            error!(?err, "Unable to add item");
            Err(err)
        }
    }
}

/// Owns the recipes widget state together with the store that feeds it.
pub struct RecipeController<S> {
    store: S,
    state: RecipeWidget,
}

impl<S: RecipeStore> RecipeController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: RecipeWidget::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> &RecipeWidget {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut RecipeWidget {
        &mut self.state
    }

    pub async fn load(&mut self) -> Result<(), StoreError> {
        let recipes = load_recipes(&self.store).await?;
        self.state.loaded(recipes);
        Ok(())
    }

    /// Saves the open dialog. On failure the message lands in the form's
    /// inline error and the dialog stays open.
    pub async fn save(&mut self) -> Result<(), SaveError> {
        let (session, form) = match (self.state.session(), self.state.form()) {
            (Some(session), Some(form)) => (session, form.clone()),
            _ => return Ok(()),
        };
        let result = save_recipe(&self.store, &form).await;
        finish_save(&mut self.state, session, result)
    }

    /// Flips the star on a recipe. The local copy only changes once the
    /// server confirms.
    pub async fn toggle_star(&mut self, id: &str) -> Result<bool, StoreError> {
        let recipe = match self.state.book().get(id) {
            Some(recipe) => recipe.clone(),
            None => return Ok(false),
        };
        let result = toggle_star(&self.store, &recipe).await;
        finish_star(&mut self.state, result)
    }
}

pub struct ItemController<S> {
    store: S,
    items: ItemList,
}

impl<S: ItemStore> ItemController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: ItemList::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub async fn load(&mut self) -> Result<(), StoreError> {
        let items = load_items(&self.store).await?;
        self.items.replace(items);
        Ok(())
    }

    pub async fn add(&mut self, input: &str) -> Result<bool, StoreError> {
        let result = add_item(&self.store, input).await;
        finish_add_item(&mut self.items, result)
    }
}
