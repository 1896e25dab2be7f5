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
use recipe_store::controller::{
    add_item, finish_add_item, finish_save, finish_star, load_items, load_recipes, save_recipe,
    toggle_star,
};
use recipes::{FormFields, ItemList, RecipeForm, RecipeWidget};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use sycamore_state::{Handler, MessageMapper};
use tracing::{debug, error, info, instrument, warn};

use crate::api::HttpStore;
use crate::js_lib;

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub recipes: RecipeWidget,
    pub items: ItemList,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            recipes: RecipeWidget::new(),
            items: ItemList::new(),
        }
    }
}

#[derive(Debug)]
pub enum Message {
    LoadRecipes,
    OpenCreate,
    OpenEdit(String),
    CloseDialog,
    AddIngredient(String),
    RemoveIngredient(usize),
    /// Appends an empty step. Carries the step text currently on the page.
    AddStep(Vec<String>),
    /// The submission key was pressed in a step.
    SubmitStep(usize, Vec<String>),
    RemoveStep(usize, Vec<String>),
    SaveRecipe(FormFields),
    ToggleStar(String),
    LoadItems,
    AddItem(String),
}

pub struct StateMachine(HttpStore);

fn with_form<F>(state: &mut AppState, f: F) -> bool
where
    F: FnOnce(&mut RecipeForm) -> bool,
{
    match state.recipes.form_mut() {
        Some(form) => f(form),
        None => {
            warn!("No recipe dialog is open");
            false
        }
    }
}

impl MessageMapper<Message, AppState> for StateMachine {
    #[instrument(skip_all, fields(?msg))]
    fn map<'ctx>(&self, cx: Scope<'ctx>, msg: Message, original: &'ctx Signal<AppState>) {
        let mut original_copy = original.get().as_ref().clone();
        match msg {
            Message::LoadRecipes => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    match load_recipes(&store).await {
                        Ok(recipes) => {
                            let mut state = original.get().as_ref().clone();
                            state.recipes.loaded(recipes);
                            original.set(state);
                        }
                        Err(err) => error!(?err, "Unable to load recipes"),
                    }
                });
                return;
            }
            Message::OpenCreate => {
                original_copy.recipes.open_create();
            }
            Message::OpenEdit(id) => {
                if !original_copy.recipes.open_edit(&id) {
                    warn!(id, "No such recipe to edit");
                    return;
                }
            }
            Message::CloseDialog => {
                original_copy.recipes.close();
            }
            Message::AddIngredient(entry) => {
                let added = with_form(&mut original_copy, |form| {
                    form.ingredient_entry = entry;
                    form.add_ingredient()
                });
                if !added {
                    return;
                }
            }
            Message::RemoveIngredient(idx) => {
                if !with_form(&mut original_copy, |form| {
                    form.remove_ingredient(idx).is_some()
                }) {
                    return;
                }
            }
            Message::AddStep(steps) => {
                with_form(&mut original_copy, |form| {
                    form.sync_steps(steps);
                    form.add_step();
                    true
                });
            }
            Message::SubmitStep(idx, steps) => {
                let handled = with_form(&mut original_copy, |form| {
                    form.sync_steps(steps);
                    form.step_submitted(idx, false)
                });
                if !handled {
                    return;
                }
            }
            Message::RemoveStep(idx, steps) => {
                with_form(&mut original_copy, |form| {
                    form.sync_steps(steps);
                    form.remove_step(idx).is_some()
                });
            }
            Message::SaveRecipe(fields) => {
                let session = match original_copy.recipes.session() {
                    Some(session) => session,
                    None => return,
                };
                let form = match original_copy.recipes.form_mut() {
                    Some(form) => {
                        form.apply_fields(fields);
                        form.clear_error();
                        form.clone()
                    }
                    None => return,
                };
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    let result = save_recipe(&store, &form).await;
                    let mut state = original.get().as_ref().clone();
                    if finish_save(&mut state.recipes, session, result).is_ok() {
                        info!("Recipe saved");
                    }
                    original.set(state);
                });
            }
            Message::ToggleStar(id) => {
                let recipe = match original_copy.recipes.book().get(&id) {
                    Some(recipe) => recipe.clone(),
                    None => {
                        warn!(id, "No such recipe to star");
                        return;
                    }
                };
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    let result = toggle_star(&store, &recipe).await;
                    let mut state = original.get().as_ref().clone();
                    match finish_star(&mut state.recipes, result) {
                        Ok(_) => original.set(state),
                        Err(err) => js_lib::alert(&err.to_string()),
                    }
                });
                return;
            }
            Message::LoadItems => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    match load_items(&store).await {
                        Ok(items) => {
                            let mut state = original.get().as_ref().clone();
                            state.items.replace(items);
                            original.set(state);
                        }
                        Err(err) => error!(?err, "Unable to load items"),
                    }
                });
                return;
            }
            Message::AddItem(text) => {
                let store = self.0.clone();
                spawn_local_scoped(cx, async move {
                    let result = add_item(&store, &text).await;
                    let mut state = original.get().as_ref().clone();
                    match finish_add_item(&mut state.items, result) {
                        Ok(true) => original.set(state),
                        Ok(false) => debug!("Ignoring blank item"),
                        Err(err) => js_lib::alert(&err.to_string()),
                    }
                });
                return;
            }
        }
        original.set(original_copy);
    }
}

pub type StateHandler<'ctx> = &'ctx Handler<'ctx, StateMachine, AppState, Message>;

pub fn get_state_handler<'ctx>(
    cx: Scope<'ctx>,
    initial: AppState,
    store: HttpStore,
) -> StateHandler<'ctx> {
    Handler::new(cx, initial, StateMachine(store))
}
