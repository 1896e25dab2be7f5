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
use thiserror::Error;

use crate::duration::{minutes_from_fields, Duration};
use crate::{Recipe, RecipeDraft};

pub const SUBMIT_KEY: &str = "Enter";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Dish name is required.")]
    MissingName,
    #[error("Add at least one ingredient.")]
    NoIngredients,
    #[error("Add at least one step.")]
    NoSteps,
}

/// The text field values the editor reads out of the page when saving.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub hours: String,
    pub minutes: String,
    pub steps: Vec<String>,
}

/// Working state of the recipe dialog. A form with no `editing_id` creates a
/// new recipe on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeForm {
    editing_id: Option<String>,
    starred: bool,
    pub name: String,
    pub description: String,
    pub hours: String,
    pub minutes: String,
    pub ingredient_entry: String,
    ingredients: Vec<String>,
    steps: Vec<String>,
    error: Option<String>,
    focus: Option<usize>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeForm {
    pub fn new() -> Self {
        Self {
            editing_id: None,
            starred: false,
            name: String::new(),
            description: String::new(),
            hours: String::new(),
            minutes: String::new(),
            ingredient_entry: String::new(),
            ingredients: Vec::new(),
            steps: vec![String::new()],
            error: None,
            focus: None,
        }
    }

    pub fn from_recipe(recipe: &Recipe) -> Self {
        let Duration { hours, minutes } = recipe.duration();
        let steps = if recipe.steps.is_empty() {
            vec![String::new()]
        } else {
            recipe.steps.clone()
        };
        Self {
            editing_id: Some(recipe.id.clone()),
            starred: recipe.starred,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            hours: hours.to_string(),
            minutes: minutes.to_string(),
            ingredient_entry: String::new(),
            ingredients: recipe.ingredients.clone(),
            steps,
            error: None,
            focus: None,
        }
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Star state of the recipe being edited. Always false in create mode.
    pub fn starred(&self) -> bool {
        self.starred
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    pub fn duration(&self) -> Duration {
        Duration::from_fields(&self.hours, &self.minutes)
    }

    pub fn apply_fields(&mut self, fields: FormFields) {
        let FormFields {
            name,
            description,
            hours,
            minutes,
            steps,
        } = fields;
        self.name = name;
        self.description = description;
        self.hours = hours;
        self.minutes = minutes;
        self.steps = steps;
    }

    /// Moves the pending ingredient entry into the chip list. Blank entries
    /// are dropped and the entry is cleared either way.
    pub fn add_ingredient(&mut self) -> bool {
        let entry = std::mem::take(&mut self.ingredient_entry);
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.ingredients.push(trimmed.to_owned());
        true
    }

    pub fn remove_ingredient(&mut self, idx: usize) -> Option<String> {
        if idx < self.ingredients.len() {
            Some(self.ingredients.remove(idx))
        } else {
            None
        }
    }

    pub fn sync_steps(&mut self, steps: Vec<String>) {
        self.steps = steps;
    }

    pub fn set_step<S: Into<String>>(&mut self, idx: usize, text: S) {
        if let Some(step) = self.steps.get_mut(idx) {
            *step = text.into();
        }
    }

    pub fn add_step(&mut self) -> usize {
        self.steps.push(String::new());
        let idx = self.steps.len() - 1;
        self.focus = Some(idx);
        idx
    }

    /// Handles the submission key pressed inside step `idx`. A plain press on
    /// a step with content appends an empty step and focuses it.
    pub fn step_submitted(&mut self, idx: usize, modifier: bool) -> bool {
        let has_text = self
            .steps
            .get(idx)
            .map(|s| !s.trim().is_empty())
            .unwrap_or(false);
        if modifier || !has_text {
            return false;
        }
        self.add_step();
        true
    }

    pub fn remove_step(&mut self, idx: usize) -> Option<String> {
        if idx >= self.steps.len() {
            return None;
        }
        self.focus = None;
        Some(self.steps.remove(idx))
    }

    /// Checks the form in order and produces the body to submit. The first
    /// failing check wins.
    pub fn validate(&self) -> Result<RecipeDraft, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let ingredients = cleaned(&self.ingredients);
        if ingredients.is_empty() {
            return Err(ValidationError::NoIngredients);
        }
        let steps = cleaned(&self.steps);
        if steps.is_empty() {
            return Err(ValidationError::NoSteps);
        }
        Ok(RecipeDraft {
            name: name.to_owned(),
            description: self.description.trim().to_owned(),
            duration_minutes: minutes_from_fields(&self.hours, &self.minutes),
            ingredients,
            steps,
        })
    }
}

fn cleaned(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_owned())
        .collect()
}

/// True when a key press in a step field should start a new step rather than
/// insert a line break.
pub fn submits_step(key: &str, modifier: bool, text: &str) -> bool {
    key == SUBMIT_KEY && !modifier && !text.trim().is_empty()
}

pub fn step_label(idx: usize) -> String {
    format!("{}.", idx + 1)
}

pub fn step_placeholder(idx: usize) -> String {
    format!("Step {}", idx + 1)
}
