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
use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::executor::block_on;

use crate::controller::*;
use crate::*;
use api::{Failure, Lookup, RecipePayload, ADD_ITEM_FAILED, SAVE_RECIPE_FAILED, STAR_FAILED};
use recipes::{Item, ItemList, Recipe, RecipeForm, RecipeWidget};

/// In memory stand in for the api. It answers with raw statuses and bodies
/// and reads them through the same `api` rules the http store uses.
#[derive(Default)]
struct FakeStore {
    recipes: RefCell<Vec<Recipe>>,
    items: RefCell<Vec<Item>>,
    calls: RefCell<Vec<String>>,
    // Body of the error response the next mutating call answers with.
    fail_with: RefCell<Option<(u16, String)>>,
    next_id: Cell<u32>,
}

impl FakeStore {
    fn with_recipes(recipes: Vec<Recipe>) -> Self {
        let store = Self::default();
        *store.recipes.borrow_mut() = recipes;
        store
    }

    fn fail_next(&self, status: u16, body: &str) {
        *self.fail_with.borrow_mut() = Some((status, body.to_owned()));
    }

    fn record<S: Into<String>>(&self, call: S) {
        self.calls.borrow_mut().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn take_failure(&self, fallback: &str) -> Option<StoreError> {
        self.fail_with
            .borrow_mut()
            .take()
            .map(|(status, body)| Failure::from_write(status, &body, fallback).into())
    }

    fn next_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("new-{}", id)
    }
}

#[async_trait(?Send)]
impl RecipeStore for FakeStore {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        self.record("list");
        Ok(self.recipes.borrow().clone())
    }

    async fn get_recipe(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        self.record(format!("get:{}", id));
        let found = self.recipes.borrow().iter().find(|r| r.id == id).cloned();
        let status = match (self.fail_with.borrow_mut().take(), &found) {
            (Some((status, _)), _) => status,
            (None, Some(_)) => 200,
            (None, None) => 404,
        };
        match Lookup::from_status(status) {
            Lookup::Found => Ok(found),
            Lookup::Missing => Ok(None),
            Lookup::Failed => Err(Failure::from_read(status).into()),
        }
    }

    async fn create_recipe(&self, payload: &RecipePayload) -> Result<Recipe, StoreError> {
        self.record("create");
        if let Some(err) = self.take_failure(SAVE_RECIPE_FAILED) {
            return Err(err);
        }
        let mut recipe = Recipe::new(self.next_id(), payload.draft.name.clone());
        recipe.description = payload.draft.description.clone();
        recipe.duration_minutes = payload.draft.duration_minutes;
        recipe.ingredients = payload.draft.ingredients.clone();
        recipe.steps = payload.draft.steps.clone();
        recipe.starred = payload.starred.unwrap_or(false);
        self.recipes.borrow_mut().push(recipe.clone());
        Ok(recipe)
    }

    async fn update_recipe(
        &self,
        id: &str,
        payload: &RecipePayload,
    ) -> Result<Recipe, StoreError> {
        self.record(format!("update:{}", id));
        if let Some(err) = self.take_failure(SAVE_RECIPE_FAILED) {
            return Err(err);
        }
        let mut recipes = self.recipes.borrow_mut();
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::status(404, "not found"))?;
        recipe.name = payload.draft.name.clone();
        recipe.description = payload.draft.description.clone();
        recipe.duration_minutes = payload.draft.duration_minutes;
        recipe.ingredients = payload.draft.ingredients.clone();
        recipe.steps = payload.draft.steps.clone();
        recipe.starred = payload.starred.unwrap_or(false);
        Ok(recipe.clone())
    }

    async fn set_starred(&self, id: &str, starred: bool) -> Result<Recipe, StoreError> {
        self.record(format!("star:{}:{}", id, starred));
        if let Some((status, _body)) = self.fail_with.borrow_mut().take() {
            return Err(Failure::from_star(status).into());
        }
        let mut recipes = self.recipes.borrow_mut();
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::from(Failure::from_star(404)))?;
        recipe.starred = starred;
        Ok(recipe.clone())
    }
}

#[async_trait(?Send)]
impl ItemStore for FakeStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.record("list-items");
        Ok(self.items.borrow().clone())
    }

    async fn create_item(&self, text: &str) -> Result<Item, StoreError> {
        self.record(format!("create-item:{}", text));
        if let Some(err) = self.take_failure(ADD_ITEM_FAILED) {
            return Err(err);
        }
        let item = Item::new(text).with_id(self.next_id());
        self.items.borrow_mut().push(item.clone());
        Ok(item)
    }
}

fn recipe(id: &str, starred: bool) -> Recipe {
    let mut r = Recipe::new(id, format!("recipe {}", id));
    r.starred = starred;
    r.ingredients = vec!["salt".to_owned()];
    r.steps = vec!["cook".to_owned()];
    r
}

fn fill(form: &mut RecipeForm) {
    form.name = "Pancakes".to_owned();
    form.ingredient_entry = "flour".to_owned();
    form.add_ingredient();
    form.set_step(0, "mix");
}

fn book_ids<S: RecipeStore>(controller: &RecipeController<S>) -> Vec<String> {
    controller
        .state()
        .book()
        .iter()
        .map(|r| r.id.clone())
        .collect()
}

macro_rules! loaded_controller {
    ($recipes:expr) => {{
        let mut controller = RecipeController::new(FakeStore::with_recipes($recipes));
        block_on(controller.load()).expect("We expect the load to succeed");
        controller.store().calls.borrow_mut().clear();
        controller
    }};
}

#[test]
fn test_empty_name_never_hits_network() {
    let mut controller = loaded_controller!(vec![]);
    controller.state_mut().open_create();
    let result = block_on(controller.save());
    assert_eq!(
        result,
        Err(SaveError::Invalid(recipes::ValidationError::MissingName))
    );
    assert!(controller.store().calls().is_empty());
    assert!(controller.state().is_open());
    assert_eq!(
        controller.state().form().and_then(|f| f.error()),
        Some("Dish name is required.")
    );
}

#[test]
fn test_missing_ingredients_and_steps_messages() {
    let mut controller = loaded_controller!(vec![]);
    controller.state_mut().open_create();
    if let Some(form) = controller.state_mut().form_mut() {
        form.name = "Soup".to_owned();
    }
    assert!(block_on(controller.save()).is_err());
    assert_eq!(
        controller.state().form().and_then(|f| f.error()),
        Some("Add at least one ingredient.")
    );

    if let Some(form) = controller.state_mut().form_mut() {
        form.ingredient_entry = "water".to_owned();
        form.add_ingredient();
        form.sync_steps(vec!["   ".to_owned()]);
    }
    assert!(block_on(controller.save()).is_err());
    assert_eq!(
        controller.state().form().and_then(|f| f.error()),
        Some("Add at least one step.")
    );
    assert!(controller.store().calls().is_empty());
}

#[test]
fn test_failed_create_shows_server_message() {
    let mut controller = loaded_controller!(vec![recipe("a", false)]);
    controller.store().fail_next(400, r#"{"error": "bad name"}"#);
    controller.state_mut().open_create();
    if let Some(form) = controller.state_mut().form_mut() {
        fill(form);
    }
    let err = block_on(controller.save()).expect_err("We expect the create to fail");
    assert_eq!(err.to_string(), "bad name");
    assert!(controller.state().is_open());
    assert_eq!(
        controller.state().form().and_then(|f| f.error()),
        Some("bad name")
    );
    assert_eq!(controller.store().calls(), vec!["create".to_owned()]);
    assert_eq!(book_ids(&controller), vec!["a".to_owned()]);
}

#[test]
fn test_failed_create_without_body_uses_generic_message() {
    let mut controller = loaded_controller!(vec![]);
    controller.store().fail_next(500, "");
    controller.state_mut().open_create();
    if let Some(form) = controller.state_mut().form_mut() {
        fill(form);
    }
    assert!(block_on(controller.save()).is_err());
    assert_eq!(
        controller.state().form().and_then(|f| f.error()),
        Some(SAVE_RECIPE_FAILED)
    );
}

#[test]
fn test_successful_create_refetches_and_closes() {
    let mut controller = loaded_controller!(vec![recipe("a", true)]);
    controller.state_mut().open_create();
    if let Some(form) = controller.state_mut().form_mut() {
        fill(form);
        form.hours = "1".to_owned();
        form.minutes = "30".to_owned();
    }
    block_on(controller.save()).expect("We expect the save to succeed");
    assert!(!controller.state().is_open());
    assert_eq!(
        controller.store().calls(),
        vec!["create".to_owned(), "list".to_owned()]
    );
    assert_eq!(book_ids(&controller), vec!["a".to_owned(), "new-1".to_owned()]);
    let created = controller
        .state()
        .book()
        .get("new-1")
        .expect("We expect the new recipe in the book");
    assert_eq!(created.duration_minutes, 90);
    assert!(!created.starred);
}

#[test]
fn test_update_keeps_star() {
    let mut controller = loaded_controller!(vec![recipe("a", true), recipe("b", false)]);
    assert!(controller.state_mut().open_edit("a"));
    if let Some(form) = controller.state_mut().form_mut() {
        form.name = "Renamed".to_owned();
    }
    block_on(controller.save()).expect("We expect the update to succeed");
    assert_eq!(
        controller.store().calls(),
        vec!["update:a".to_owned(), "list".to_owned()]
    );
    let updated = controller
        .state()
        .book()
        .get("a")
        .expect("We expect the recipe to still be present");
    assert_eq!(updated.name, "Renamed");
    assert!(updated.starred);
}

#[test]
fn test_toggle_star_flips_and_sorts() {
    let mut controller = loaded_controller!(vec![
        recipe("a", false),
        recipe("b", true),
        recipe("c", false),
        recipe("d", false),
    ]);
    assert_eq!(book_ids(&controller), vec!["b", "a", "c", "d"]);
    assert!(block_on(controller.toggle_star("c")).expect("We expect the star to succeed"));
    assert_eq!(controller.store().calls(), vec!["star:c:true".to_owned()]);
    assert_eq!(book_ids(&controller), vec!["b", "c", "a", "d"]);
    let starred: Vec<bool> = controller.state().book().iter().map(|r| r.starred).collect();
    assert_eq!(starred, vec![true, true, false, false]);

    assert!(block_on(controller.toggle_star("b")).expect("We expect the unstar to succeed"));
    assert_eq!(book_ids(&controller), vec!["c", "a", "b", "d"]);
}

#[test]
fn test_toggle_star_failure_leaves_state() {
    let mut controller = loaded_controller!(vec![recipe("a", false), recipe("b", false)]);
    let before = controller.state().clone();
    controller.store().fail_next(500, r#"{"error": "ignored"}"#);
    let err = block_on(controller.toggle_star("a")).expect_err("We expect the star to fail");
    assert_eq!(err.to_string(), STAR_FAILED);
    assert_eq!(controller.state(), &before);

    assert_eq!(block_on(controller.toggle_star("missing")), Ok(false));
}

#[test]
fn test_get_recipe_classifies_status() {
    let store = FakeStore::with_recipes(vec![recipe("a", false)]);
    assert_eq!(
        block_on(store.get_recipe("a")).map(|r| r.map(|r| r.name)),
        Ok(Some("recipe a".to_owned()))
    );
    assert_eq!(block_on(store.get_recipe("zz")), Ok(None));

    store.fail_next(404, "");
    assert_eq!(block_on(store.get_recipe("a")), Ok(None));
    store.fail_next(500, r#"{"error": "boom"}"#);
    assert_eq!(
        block_on(store.get_recipe("a")),
        Err(StoreError::status(500, "Status: 500"))
    );
}

#[test]
fn test_failure_becomes_status_error() {
    let err = StoreError::from(Failure::from_write(
        400,
        r#"{"error": "bad name"}"#,
        SAVE_RECIPE_FAILED,
    ));
    assert_eq!(err, StoreError::status(400, "bad name"));
    assert_eq!(err.to_string(), "bad name");
    let err = StoreError::from(Failure::from_star(502));
    assert_eq!(err.to_string(), STAR_FAILED);
}

#[test]
fn test_finish_save_respects_session() {
    let mut state = RecipeWidget::new();
    state.loaded(vec![recipe("a", false)]);
    state.open_create();
    let saving = state.session().expect("We expect an open dialog");
    state.close();
    assert!(state.open_edit("a"));

    let result = finish_save(&mut state, saving, Ok(vec![recipe("a", false), recipe("b", true)]));
    assert_eq!(result, Ok(()));
    assert!(state.is_open());
    assert_eq!(state.form().and_then(|f| f.editing_id()), Some("a"));
    assert_eq!(state.book().len(), 2);

    let failed = Err(SaveError::Store(StoreError::status(400, "bad name")));
    assert!(finish_save(&mut state, saving, failed).is_err());
    assert_eq!(state.form().and_then(|f| f.error()), None);

    let current = state.session().expect("We expect an open dialog");
    let failed = Err(SaveError::Store(StoreError::status(400, "bad name")));
    assert!(finish_save(&mut state, current, failed).is_err());
    assert_eq!(state.form().and_then(|f| f.error()), Some("bad name"));
    assert!(finish_save(&mut state, current, Ok(vec![recipe("a", false)])).is_ok());
    assert!(!state.is_open());
}

#[test]
fn test_finish_star_and_add_item() {
    let mut state = RecipeWidget::new();
    state.loaded(vec![recipe("a", false), recipe("b", false)]);
    let before = state.clone();
    let err = StoreError::from(Failure::from_star(500));
    assert_eq!(finish_star(&mut state, Err(err.clone())), Err(err));
    assert_eq!(state, before);
    assert_eq!(finish_star(&mut state, Ok(recipe("b", true))), Ok(true));
    assert_eq!(
        state.book().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        vec!["b", "a"]
    );
    assert_eq!(finish_star(&mut state, Ok(recipe("zz", true))), Ok(false));

    let mut items = ItemList::new();
    assert_eq!(finish_add_item(&mut items, Ok(None)), Ok(false));
    assert_eq!(
        finish_add_item(&mut items, Ok(Some(vec![Item::new("milk")]))),
        Ok(true)
    );
    let err = StoreError::from(Failure::from_write(400, "", ADD_ITEM_FAILED));
    assert_eq!(finish_add_item(&mut items, Err(err.clone())), Err(err));
    assert_eq!(items.len(), 1);
}

#[test]
fn test_items_flow() {
    let mut controller = ItemController::new(FakeStore::default());
    block_on(controller.load()).expect("We expect the load to succeed");
    assert!(controller.items().is_empty());

    assert_eq!(block_on(controller.add("   ")), Ok(false));
    assert_eq!(controller.store().calls(), vec!["list-items".to_owned()]);

    assert_eq!(block_on(controller.add("  milk ")), Ok(true));
    assert_eq!(controller.items().len(), 1);
    assert_eq!(
        controller.store().calls(),
        vec![
            "list-items".to_owned(),
            "create-item:milk".to_owned(),
            "list-items".to_owned(),
        ]
    );

    controller.store().fail_next(400, "not json");
    let err = block_on(controller.add("eggs")).expect_err("We expect the add to fail");
    assert_eq!(err.to_string(), ADD_ITEM_FAILED);
    assert_eq!(controller.items().len(), 1);
}
