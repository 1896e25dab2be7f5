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
use tracing::{debug, instrument};

use crate::app_state::{Message, StateHandler};
use crate::components::RecipeDialog;
use recipes::view::{recipe_cards, RecipeCard};

#[derive(Prop)]
pub struct RecipeCardProps<'ctx> {
    sh: StateHandler<'ctx>,
    card: RecipeCard,
}

#[instrument(skip_all, fields(id=%props.card.id))]
#[component]
pub fn RecipeCardView<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipeCardProps<'ctx>) -> View<G> {
    let RecipeCardProps { sh, card } = props;
    let class = card.class();
    let star_title = card.star_title();
    let star_symbol = card.star_symbol();
    let counts = format!(
        "{} ingredients · {} steps",
        card.ingredient_count, card.step_count
    );
    let updated = match card.updated {
        Some(updated) => view! {cx, div(class="updated") { (updated) } },
        None => View::empty(),
    };
    let RecipeCard {
        id,
        title,
        duration,
        description,
        ..
    } = card;
    let edit_id = id.clone();
    view! {cx,
        article(class=class) {
            header(class="row-flex") {
                h3 { (title) }
                button(class="star outline", title=star_title, on:click=move |_| {
                    sh.dispatch(cx, Message::ToggleStar(id.clone()))
                }) { (star_symbol) }
            }
            div(class="duration") { (duration) }
            p(class="description") { (description) }
            div(class="counts") { (counts) }
            (updated)
            button(class="outline", on:click=move |_| {
                sh.dispatch(cx, Message::OpenEdit(edit_id.clone()))
            }) { "Edit" }
        }
    }
}

#[derive(Prop)]
pub struct RecipesProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn RecipesWidget<'ctx, G: Html>(cx: Scope<'ctx>, props: RecipesProps<'ctx>) -> View<G> {
    let RecipesProps { sh } = props;
    let cards = sh.get_selector(cx, |state| recipe_cards(state.get().recipes.book()));
    view! {cx,
        section(id="recipes") {
            div(class="row-flex") {
                h2 { "Recipes" }
                button(id="newRecipe", on:click=move |_| {
                    sh.dispatch(cx, Message::OpenCreate)
                }) { "New recipe" }
            }
            div(id="recipeGrid", class="recipe-grid") {
                Indexed(
                    iterable=cards,
                    view=move |cx, card| {
                        debug!(id=%card.id, "Rendering recipe card");
                        view! {cx, RecipeCardView(sh=sh, card=card) }
                    },
                )
            }
            RecipeDialog(sh=sh)
        }
    }
}
