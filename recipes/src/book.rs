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
use crate::{Item, Recipe};

/// The client's copy of the recipe list. It is only ever replaced wholesale
/// from a server listing or one record at a time after a star toggle, and it
/// always keeps starred recipes ahead of the rest.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut book = Self::new();
        book.replace(recipes);
        book
    }

    pub fn replace(&mut self, recipes: Vec<Recipe>) {
        self.recipes = recipes;
        self.sort();
    }

    /// Swaps in an updated copy of a recipe by id. Returns false if no recipe
    /// with that id is present.
    pub fn replace_one(&mut self, recipe: Recipe) -> bool {
        match self.recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(existing) => {
                *existing = recipe;
                self.sort();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Recipe] {
        self.recipes.as_slice()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn sort(&mut self) {
        // sort_by_key is stable so server order survives within each group.
        self.recipes.sort_by_key(|r| !r.starred);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn replace(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for ItemList {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}
