//! Router-link indirection for entity rows.
//!
//! Same contract as the navbar's `NavBuilder`: the platform crate owns
//! the `Route` enum, so it registers builders that wrap typed router
//! links, and views call `horse_link` / `stable_link` with just the key
//! and label. While nothing is registered (component previews, tests)
//! the links render as plain text.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;

pub struct EntityLinks {
    pub horse: fn(horse_id: &str, label: &str) -> Element,
    pub stable: fn(stable_name: &str, label: &str) -> Element,
    pub stable_index: fn(label: &str) -> Element,
}

static ENTITY_LINKS: OnceCell<EntityLinks> = OnceCell::new();

pub fn register_entity_links(links: EntityLinks) {
    let _ = ENTITY_LINKS.set(links);
}

pub fn horse_link(horse_id: &str, label: &str) -> Element {
    match ENTITY_LINKS.get() {
        Some(links) => (links.horse)(horse_id, label),
        None => rsx! { span { "{label}" } },
    }
}

pub fn stable_link(stable_name: &str, label: &str) -> Element {
    match ENTITY_LINKS.get() {
        Some(links) => (links.stable)(stable_name, label),
        None => rsx! { span { "{label}" } },
    }
}

pub fn stable_index_link(label: &str) -> Element {
    match ENTITY_LINKS.get() {
        Some(links) => (links.stable_index)(label),
        None => rsx! { span { "{label}" } },
    }
}
