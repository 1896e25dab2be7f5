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
use serde::{Deserialize, Serialize};

use recipes::RecipeDraft;

pub const ADD_ITEM_FAILED: &str = "Failed to add item";
pub const SAVE_RECIPE_FAILED: &str = "Failed to save recipe";
pub const STAR_FAILED: &str = "Failed to update star";

/// Body the server sends back with a non-success status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Pulls the server's message out of a raw response body. Missing,
    /// empty, or unparseable bodies yield the fallback.
    pub fn message_or(body: &str, fallback: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| fallback.to_owned())
    }
}

/// A non-success response reduced to its status and the message the user
/// sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub status: u16,
    pub message: String,
}

impl Failure {
    /// Write endpoints report the server's `error` text when the body has one.
    pub fn from_write(status: u16, body: &str, fallback: &str) -> Self {
        Self {
            status,
            message: ErrorBody::message_or(body, fallback),
        }
    }

    /// The star endpoint's body is never shown.
    pub fn from_star(status: u16) -> Self {
        Self {
            status,
            message: STAR_FAILED.to_owned(),
        }
    }

    /// Listing reads carry no error body contract.
    pub fn from_read(status: u16) -> Self {
        Self {
            status,
            message: format!("Status: {}", status),
        }
    }
}

/// How a single record fetch turned out, judged by status alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found,
    Missing,
    Failed,
}

impl Lookup {
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Found,
            404 => Self::Missing,
            _ => Self::Failed,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub text: String,
}

impl NewItem {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }
}

/// Create and update body for recipes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipePayload {
    #[serde(flatten)]
    pub draft: RecipeDraft,
    // NOTE(jwall): The server resets starred to false when a PUT leaves it
    // out so updates carry the current value. Creates omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
}

impl RecipePayload {
    pub fn create(draft: RecipeDraft) -> Self {
        Self {
            draft,
            starred: None,
        }
    }

    pub fn update(draft: RecipeDraft, starred: bool) -> Self {
        Self {
            draft,
            starred: Some(starred),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRequest {
    pub starred: bool,
}

/// Builds resource paths under an api root such as `/api`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    root: String,
}

impl Paths {
    pub fn new<S: Into<String>>(root: S) -> Self {
        let mut root = root.into();
        while root.ends_with('/') {
            root.pop();
        }
        Self { root }
    }

    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    pub fn items(&self) -> String {
        format!("{}/items", self.root)
    }

    pub fn recipes(&self) -> String {
        format!("{}/recipes", self.root)
    }

    pub fn recipe<S: AsRef<str>>(&self, id: S) -> String {
        format!("{}/recipes/{}", self.root, id.as_ref())
    }

    pub fn recipe_star<S: AsRef<str>>(&self, id: S) -> String {
        format!("{}/recipes/{}/star", self.root, id.as_ref())
    }
}
