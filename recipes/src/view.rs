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
//! Plain data descriptions of what the widgets display. Components render
//! these and never look at the records directly.
use crate::form::{step_label, step_placeholder};
use crate::{ItemList, Recipe, RecipeBook, RecipeForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub description: String,
    pub ingredient_count: usize,
    pub step_count: usize,
    pub starred: bool,
    pub updated: Option<String>,
}

impl RecipeCard {
    pub fn star_symbol(&self) -> &'static str {
        if self.starred {
            "★"
        } else {
            "☆"
        }
    }

    pub fn star_title(&self) -> &'static str {
        if self.starred {
            "Unstar"
        } else {
            "Star"
        }
    }

    pub fn class(&self) -> &'static str {
        if self.starred {
            "recipe-card starred"
        } else {
            "recipe-card"
        }
    }
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.name.clone(),
            duration: recipe.duration().to_string(),
            description: recipe.description.clone(),
            ingredient_count: recipe.ingredients.len(),
            step_count: recipe.steps.len(),
            starred: recipe.starred,
            updated: recipe
                .updated_at
                .map(|ts| format!("Updated {}", ts.format("%Y-%m-%d"))),
        }
    }
}

pub fn recipe_cards(book: &RecipeBook) -> Vec<RecipeCard> {
    book.iter().map(RecipeCard::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub index: usize,
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub focused: bool,
}

impl StepRow {
    pub fn element_id(&self) -> String {
        step_element_id(self.index)
    }
}

pub fn step_element_id(idx: usize) -> String {
    format!("step-{}", idx)
}

pub fn step_rows(form: &RecipeForm) -> Vec<StepRow> {
    let focus = form.focus();
    form.steps()
        .iter()
        .enumerate()
        .map(|(index, value)| StepRow {
            index,
            label: step_label(index),
            placeholder: step_placeholder(index),
            value: value.clone(),
            focused: focus == Some(index),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub index: usize,
    pub text: String,
}

pub fn ingredient_chips(form: &RecipeForm) -> Vec<Chip> {
    form.ingredients()
        .iter()
        .enumerate()
        .map(|(index, text)| Chip {
            index,
            text: text.clone(),
        })
        .collect()
}

pub fn dialog_title(form: &RecipeForm) -> &'static str {
    if form.is_editing() {
        "Edit recipe"
    } else {
        "New recipe"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub key: String,
    pub text: String,
}

pub fn item_rows(items: &ItemList) -> Vec<ItemRow> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| ItemRow {
            key: item.id.clone().unwrap_or_else(|| format!("item-{}", idx)),
            text: item.text.clone(),
        })
        .collect()
}
