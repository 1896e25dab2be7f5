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
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Event, HtmlElement, HtmlTextAreaElement, KeyboardEvent};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn get_element_by_id<E>(id: &str) -> Option<E>
where
    E: JsCast,
{
    document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|e| e.dyn_into::<E>().ok())
}

pub fn body_attribute(name: &str) -> Option<String> {
    document()
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute(name))
}

/// Shows a blocking alert with the message.
pub fn alert(msg: &str) {
    if let Some(w) = window() {
        if let Err(err) = w.alert_with_message(msg) {
            error!(?err, "Unable to show alert");
        }
    }
}

pub fn focus_element(id: &str) {
    if let Some(el) = get_element_by_id::<HtmlElement>(id) {
        if let Err(err) = el.focus() {
            error!(?err, id, "Unable to focus element");
        }
    }
}

/// The key pressed and whether any modifier was held.
pub fn key_press(ev: &Event) -> Option<(String, bool)> {
    ev.dyn_ref::<KeyboardEvent>().map(|k| {
        let modifier = k.shift_key() || k.ctrl_key() || k.alt_key() || k.meta_key();
        (k.key(), modifier)
    })
}

/// Reads every textarea under the element with `container_id` in document
/// order.
pub fn textarea_values(container_id: &str) -> Vec<String> {
    let nodes = match document()
        .and_then(|d| d.query_selector_all(&format!("#{} textarea", container_id)).ok())
    {
        Some(nodes) => nodes,
        None => return Vec::new(),
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.get(idx))
        .filter_map(|node| node.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value())
        .collect()
}
