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
use crate::{
    api::HttpStore,
    app_state::{self, AppState, Message},
    components::*,
    config::ClientConfig,
};
use tracing::{info, instrument};

use sycamore::prelude::*;

#[instrument]
#[component]
pub fn UI<G: Html>(cx: Scope) -> View<G> {
    let config = ClientConfig::from_document();
    info!(api_root = %config.api_root, "Starting UI");
    let store = HttpStore::new(config.api_root);
    let sh = app_state::get_state_handler(cx, AppState::new(), store);
    sh.dispatch(cx, Message::LoadItems);
    sh.dispatch(cx, Message::LoadRecipes);

    view! { cx,
        div(class="app") {
            Header(sh=sh)
            main(class="container-fluid") {
                ItemsWidget(sh=sh)
                RecipesWidget(sh=sh)
            }
        }
    }
}
