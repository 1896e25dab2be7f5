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

use crate::app_state::StateHandler;

#[derive(Prop)]
pub struct HeaderProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn Header<'ctx, G: Html>(cx: Scope<'ctx>, props: HeaderProps<'ctx>) -> View<G> {
    let HeaderProps { sh } = props;
    let counts = sh.get_selector(cx, |state| {
        let state = state.get();
        (state.items.len(), state.recipes.book().len())
    });
    view! {cx,
        nav(class="no-print") {
            h1(class="title") { "Cookbook" }
            ul {
                li { a(href="#items") { "Items (" (counts.get().0) ")" } }
                li { a(href="#recipes") { "Recipes (" (counts.get().1) ")" } }
            }
        }
    }
}
