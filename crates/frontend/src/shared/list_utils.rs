/// List helpers shared by every page: search box with debounce and match highlighting.
/// Filtering itself lives in `contracts::shared::filter`.
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub use contracts::shared::filter::{filter_list, Searchable};
use contracts::shared::filter::highlight_segments;

use crate::shared::config::SEARCH_DEBOUNCE_MS;

/// Highlights matches of `filter` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let segments = highlight_segments(text, filter);
    if segments.len() == 1 && !segments[0].1 {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    segments
        .into_iter()
        .map(|(part, matched)| {
            let part = part.to_string();
            if matched {
                view! { <mark class="search-highlight">{part}</mark> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Search box. `on_input` fires on every keystroke (local filtering),
/// `on_change` fires once typing pauses (server search).
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called on every keystroke
    #[prop(optional, into)]
    on_input: Option<Callback<String>>,
    /// Called after the debounce delay
    #[prop(optional, into)]
    on_change: Option<Callback<String>>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input = move |new_value: String| {
        if let Some(cb) = on_input {
            cb.run(new_value.clone());
        }
        if let Some(cb) = on_change {
            // Dropping the previous timeout cancels it
            let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || cb.run(new_value));
            pending.set_value(Some(timeout));
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        if let Some(cb) = on_input {
            cb.run(String::new());
        }
        if let Some(cb) = on_change {
            cb.run(String::new());
        }
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button class="search-input__clear" on:click=clear_filter title="Bersihkan">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
