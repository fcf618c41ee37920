use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use super::tabs::pages::{page_def, tab_label_for_key};

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            if page_def(active_key).is_some() {
                self.open_tab(active_key, tab_label_for_key(active_key));
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", active_key)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    );
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        let active = self.active.get_untracked();
        let mut next = None;
        self.opened.update(|tabs| {
            next = next_active_after_close(tabs, key, active.as_deref());
            tabs.retain(|tab| tab.key != key);
        });
        if next != active {
            self.active.set(next);
        }
    }

    /// Drops every tab, e.g. on logout.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Which tab is active once `closing` is gone: unchanged unless the closed tab
/// was active, then its right neighbour, else its left neighbour.
pub fn next_active_after_close(tabs: &[Tab], closing: &str, active: Option<&str>) -> Option<String> {
    if active != Some(closing) {
        return active.map(str::to_string);
    }
    let pos = tabs.iter().position(|t| t.key == closing)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|p| tabs.get(p)))
        .map(|t| t.key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_closing_inactive_tab_keeps_active() {
        let t = tabs(&["products", "sales", "roles"]);
        assert_eq!(next_active_after_close(&t, "roles", Some("sales")), Some("sales".into()));
    }

    #[test]
    fn test_closing_active_tab_moves_right_then_left() {
        let t = tabs(&["products", "sales", "roles"]);
        assert_eq!(next_active_after_close(&t, "sales", Some("sales")), Some("roles".into()));
        assert_eq!(next_active_after_close(&t, "roles", Some("roles")), Some("sales".into()));
        assert_eq!(next_active_after_close(&tabs(&["sales"]), "sales", Some("sales")), None);
    }
}
