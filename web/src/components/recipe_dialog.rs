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
use sycamore::{futures::spawn_local_scoped, prelude::*};
use tracing::{debug, instrument};

use crate::app_state::{Message, StateHandler};
use crate::js_lib;
use recipes::form::{submits_step, SUBMIT_KEY};
use recipes::view::{dialog_title, ingredient_chips, step_rows, Chip, StepRow};
use recipes::FormFields;

pub const STEP_LIST_ID: &str = "stepList";

/// Field values a freshly opened dialog starts from.
#[derive(Debug, Clone, PartialEq)]
struct DialogSeed {
    session: u64,
    title: &'static str,
    name: String,
    description: String,
    hours: String,
    minutes: String,
}

fn step_values() -> Vec<String> {
    js_lib::textarea_values(STEP_LIST_ID)
}

#[derive(Prop)]
pub struct StepFieldProps<'ctx> {
    sh: StateHandler<'ctx>,
    row: StepRow,
}

#[instrument(skip_all, fields(index=props.row.index))]
#[component]
pub fn StepField<'ctx, G: Html>(cx: Scope<'ctx>, props: StepFieldProps<'ctx>) -> View<G> {
    let StepFieldProps { sh, row } = props;
    let id = row.element_id();
    let StepRow {
        index,
        label,
        placeholder,
        value,
        focused,
    } = row;
    let label_for = id.clone();
    let text = create_signal(cx, value);
    if focused {
        let id = id.clone();
        // The textarea only exists once this view is mounted.
        spawn_local_scoped(cx, async move {
            js_lib::focus_element(&id);
        });
    }
    view! {cx,
        li(class="step row-flex") {
            label(for=label_for, class="step-label") { (label) }
            textarea(id=id, rows=2, placeholder=placeholder, bind:value=text, on:keydown=move |ev: web_sys::Event| {
                if let Some((key, modifier)) = js_lib::key_press(&ev) {
                    if submits_step(&key, modifier, text.get_untracked().as_str()) {
                        ev.prevent_default();
                        sh.dispatch(cx, Message::SubmitStep(index, step_values()));
                    }
                }
            })
            button(type="button", class="outline", title="Remove step", on:click=move |_| {
                sh.dispatch(cx, Message::RemoveStep(index, step_values()))
            }) { "×" }
        }
    }
}

#[derive(Prop)]
pub struct ChipProps<'ctx> {
    sh: StateHandler<'ctx>,
    chip: Chip,
}

#[component]
pub fn IngredientChip<'ctx, G: Html>(cx: Scope<'ctx>, props: ChipProps<'ctx>) -> View<G> {
    let ChipProps { sh, chip } = props;
    let Chip { index, text } = chip;
    view! {cx,
        span(class="chip") {
            (text)
            button(type="button", class="chip-remove", title="Remove ingredient", on:click=move |_| {
                sh.dispatch(cx, Message::RemoveIngredient(index))
            }) { "×" }
        }
    }
}

#[derive(Prop)]
pub struct DialogProps<'ctx> {
    sh: StateHandler<'ctx>,
}

#[component]
pub fn RecipeDialog<'ctx, G: Html>(cx: Scope<'ctx>, props: DialogProps<'ctx>) -> View<G> {
    let DialogProps { sh } = props;
    let name = create_signal(cx, String::new());
    let description = create_signal(cx, String::new());
    let hours = create_signal(cx, String::new());
    let minutes = create_signal(cx, String::new());
    let ingredient_entry = create_signal(cx, String::new());
    let last_session = create_signal(cx, None::<u64>);

    let seed = sh.get_selector(cx, |state| {
        let state = state.get();
        let session = state.recipes.session()?;
        let form = state.recipes.form()?;
        Some(DialogSeed {
            session,
            title: dialog_title(form),
            name: form.name.clone(),
            description: form.description.clone(),
            hours: form.hours.clone(),
            minutes: form.minutes.clone(),
        })
    });
    // Reset the text fields only when a new dialog session opens so typing is
    // never overwritten by unrelated state changes.
    create_effect(cx, move || {
        let seed = seed.get();
        let seed = match seed.as_ref() {
            Some(seed) => seed,
            None => {
                last_session.set(None);
                return;
            }
        };
        if *last_session.get_untracked() == Some(seed.session) {
            return;
        }
        debug!(session = seed.session, "Seeding recipe dialog");
        last_session.set(Some(seed.session));
        name.set(seed.name.clone());
        description.set(seed.description.clone());
        hours.set(seed.hours.clone());
        minutes.set(seed.minutes.clone());
        ingredient_entry.set(String::new());
    });

    let backdrop_class = sh.get_selector(cx, |state| {
        if state.get().recipes.is_open() {
            "dialog-backdrop open"
        } else {
            "dialog-backdrop"
        }
    });
    let title = create_memo(cx, move || {
        seed.get()
            .as_ref()
            .as_ref()
            .map(|seed| seed.title)
            .unwrap_or_default()
    });
    let error = sh.get_selector(cx, |state| {
        state
            .get()
            .recipes
            .form()
            .and_then(|form| form.error().map(str::to_owned))
            .unwrap_or_default()
    });
    let chips = sh.get_selector(cx, |state| {
        state
            .get()
            .recipes
            .form()
            .map(ingredient_chips)
            .unwrap_or_default()
    });
    // Rows are tagged with the session so a reopened dialog never reuses a
    // previous session's textareas.
    let steps = sh.get_selector(cx, |state| {
        let state = state.get();
        match (state.recipes.session(), state.recipes.form()) {
            (Some(session), Some(form)) => step_rows(form)
                .into_iter()
                .map(|row| (session, row))
                .collect(),
            _ => Vec::new(),
        }
    });

    let add_ingredient = move || {
        let entry = ingredient_entry.get_untracked().as_ref().clone();
        if entry.trim().is_empty() {
            return;
        }
        ingredient_entry.set(String::new());
        sh.dispatch(cx, Message::AddIngredient(entry));
    };

    view! {cx,
        div(class=backdrop_class.get(), on:click=move |ev: web_sys::Event| {
            if ev.target() == ev.current_target() {
                sh.dispatch(cx, Message::CloseDialog)
            }
        }) {
            form(class="recipe-dialog", on:submit=move |ev: web_sys::Event| {
                ev.prevent_default();
                let fields = FormFields {
                    name: name.get_untracked().as_ref().clone(),
                    description: description.get_untracked().as_ref().clone(),
                    hours: hours.get_untracked().as_ref().clone(),
                    minutes: minutes.get_untracked().as_ref().clone(),
                    steps: step_values(),
                };
                sh.dispatch(cx, Message::SaveRecipe(fields));
            }) {
                h2 { (title.get()) }
                label(for="dishName") { "Dish name" }
                input(type="text", id="dishName", bind:value=name)
                label(for="dishDescription") { "Description" }
                textarea(id="dishDescription", rows=3, bind:value=description)
                div(class="row-flex") {
                    label(for="durationHours") { "Hours" }
                    input(type="number", id="durationHours", min="0", placeholder="0", bind:value=hours)
                    label(for="durationMinutes") { "Minutes" }
                    input(type="number", id="durationMinutes", min="0", max="59", placeholder="0", bind:value=minutes)
                }
                label(for="ingredientInput") { "Ingredients" }
                div(class="row-flex") {
                    input(type="text", id="ingredientInput", placeholder="Add an ingredient", bind:value=ingredient_entry, on:keydown=move |ev: web_sys::Event| {
                        if let Some((key, modifier)) = js_lib::key_press(&ev) {
                            if key == SUBMIT_KEY && !modifier {
                                ev.prevent_default();
                                add_ingredient();
                            }
                        }
                    })
                    button(type="button", class="outline", on:click=move |_| add_ingredient()) { "Add" }
                }
                div(class="chips") {
                    Indexed(
                        iterable=chips,
                        view=move |cx, chip| view! {cx, IngredientChip(sh=sh, chip=chip) },
                    )
                }
                label { "Steps" }
                ol(id=STEP_LIST_ID, class="steps") {
                    Indexed(
                        iterable=steps,
                        view=move |cx, (_session, row)| view! {cx, StepField(sh=sh, row=row) },
                    )
                }
                button(type="button", class="outline", on:click=move |_| {
                    sh.dispatch(cx, Message::AddStep(step_values()))
                }) { "Add step" }
                div(class="form-error", role="alert") { (error.get()) }
                div(class="row-flex") {
                    button(type="button", class="secondary", on:click=move |_| {
                        sh.dispatch(cx, Message::CloseDialog)
                    }) { "Cancel" }
                    button(type="submit") { "Save" }
                }
            }
        }
    }
}
