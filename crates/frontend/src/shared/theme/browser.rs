//! Browser-backed implementations of the appearance dependencies.

use super::appearance::{AppearanceStorage, ColorSchemeQuery, ResolvedTheme};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl AppearanceStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        window()?.local_storage().ok()??.get_item(key).ok()?
    }

    fn store(&self, key: &str, value: &str) {
        if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(key, value);
        }
    }
}

/// `window.matchMedia('(prefers-color-scheme: dark)')`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuery;

fn dark_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_QUERY).ok()?
}

impl ColorSchemeQuery for MediaQuery {
    fn prefers_dark(&self) -> bool {
        dark_query().map(|q| q.matches()).unwrap_or(false)
    }
}

/// Paint the theme: `data-theme` on body, `dark` class on the root element.
pub fn apply_theme(theme: ResolvedTheme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    if let Some(root) = document.document_element() {
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Calls `on_change` whenever the OS colour scheme flips. Lives for the
/// whole page, like the provider that registers it.
pub fn watch_color_scheme(on_change: impl Fn() + 'static) {
    let Some(query) = dark_query() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| on_change()) as Box<dyn FnMut(_)>);
    if query
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}
