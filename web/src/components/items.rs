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
use sycamore::prelude::*;
use tracing::debug;

use crate::app_state::{Message, StateHandler};
use recipes::{item_text, view::item_rows};

#[derive(Prop)]
pub struct ItemsProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn ItemsWidget<'ctx, G: Html>(cx: Scope<'ctx>, props: ItemsProps<'ctx>) -> View<G> {
    let ItemsProps { sh } = props;
    let entry = create_signal(cx, String::new());
    let rows = sh.get_selector(cx, |state| item_rows(&state.get().items));
    view! {cx,
        section(id="items") {
            h2 { "Items" }
            form(id="itemForm", class="row-flex", on:submit=move |ev: web_sys::Event| {
                ev.prevent_default();
                let text = match item_text(entry.get_untracked().as_str()) {
                    Some(text) => text,
                    None => {
                        debug!("Ignoring blank item");
                        return;
                    }
                };
                entry.set(String::new());
                sh.dispatch(cx, Message::AddItem(text));
            }) {
                input(type="text", id="itemInput", placeholder="New item", bind:value=entry)
                button(type="submit") { "Add" }
            }
            ul(id="itemsList") {
                Keyed(
                    iterable=rows,
                    view=|cx, row| view! {cx, li { (row.text) } },
                    key=|row| row.key.clone(),
                )
            }
        }
    }
}
