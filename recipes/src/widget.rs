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
use crate::{Recipe, RecipeBook, RecipeForm};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Closed,
    Open(RecipeForm),
}

/// Everything the recipes widget holds between user actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeWidget {
    book: RecipeBook,
    dialog: Dialog,
    // Bumped on every open so views can tell two dialog sessions apart.
    session: u64,
}

impl Default for RecipeWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeWidget {
    pub fn new() -> Self {
        Self {
            book: RecipeBook::new(),
            dialog: Dialog::Closed,
            session: 0,
        }
    }

    pub fn book(&self) -> &RecipeBook {
        &self.book
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn is_open(&self) -> bool {
        matches!(self.dialog, Dialog::Open(_))
    }

    /// The current dialog session or None when the dialog is closed.
    pub fn session(&self) -> Option<u64> {
        match self.dialog {
            Dialog::Open(_) => Some(self.session),
            Dialog::Closed => None,
        }
    }

    pub fn form(&self) -> Option<&RecipeForm> {
        match &self.dialog {
            Dialog::Open(form) => Some(form),
            Dialog::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut RecipeForm> {
        match &mut self.dialog {
            Dialog::Open(form) => Some(form),
            Dialog::Closed => None,
        }
    }

    pub fn open_create(&mut self) {
        self.open(RecipeForm::new());
    }

    /// Opens the editor on a recipe from the book. Unknown ids leave the
    /// dialog as it was.
    pub fn open_edit(&mut self, id: &str) -> bool {
        match self.book.get(id) {
            Some(recipe) => {
                let form = RecipeForm::from_recipe(recipe);
                self.open(form);
                true
            }
            None => false,
        }
    }

    fn open(&mut self, form: RecipeForm) {
        self.session = self.session.wrapping_add(1);
        self.dialog = Dialog::Open(form);
    }

    pub fn close(&mut self) {
        self.dialog = Dialog::Closed;
    }

    pub fn loaded(&mut self, recipes: Vec<Recipe>) {
        self.book.replace(recipes);
    }

    /// Takes the listing from a finished save. The dialog only closes if it
    /// is still the session that started the save.
    pub fn saved(&mut self, session: u64, recipes: Vec<Recipe>) -> bool {
        self.book.replace(recipes);
        if self.session() == Some(session) {
            self.close();
            true
        } else {
            false
        }
    }

    /// Shows a save failure inline on the session that started the save.
    /// Returns false when that dialog is gone.
    pub fn save_failed<S: Into<String>>(&mut self, session: u64, msg: S) -> bool {
        if self.session() != Some(session) {
            return false;
        }
        match self.form_mut() {
            Some(form) => {
                form.set_error(msg);
                true
            }
            None => false,
        }
    }

    pub fn starred(&mut self, recipe: Recipe) -> bool {
        self.book.replace_one(recipe)
    }
}
