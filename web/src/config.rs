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
use crate::js_lib;

pub const API_ROOT_ATTR: &str = "data-api-root";
pub const DEFAULT_API_ROOT: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_root: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: DEFAULT_API_ROOT.to_owned(),
        }
    }
}

impl ClientConfig {
    pub fn with_api_root(root: Option<String>) -> Self {
        match root
            .map(|r| r.trim().trim_end_matches('/').to_owned())
            .filter(|r| !r.is_empty())
        {
            Some(api_root) => Self { api_root },
            None => Self::default(),
        }
    }

    /// Reads the api root off the page's `<body data-api-root=...>`.
    pub fn from_document() -> Self {
        Self::with_api_root(js_lib::body_attribute(API_ROOT_ATTR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root() {
        assert_eq!(ClientConfig::with_api_root(None).api_root, "/api");
        assert_eq!(
            ClientConfig::with_api_root(Some("  ".to_owned())).api_root,
            "/api"
        );
        assert_eq!(
            ClientConfig::with_api_root(Some("/kitchen/api/".to_owned())).api_root,
            "/kitchen/api"
        );
    }
}
