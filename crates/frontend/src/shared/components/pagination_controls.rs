use crate::shared::config::PAGE_SIZE_OPTIONS;
use crate::shared::icons::icon;
use contracts::shared::pagination::PageMeta;
use leptos::prelude::*;

/// Pager for server-paginated lists. Pages are 1-indexed like the API.
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<PageMeta>,
    /// Called with the requested page number
    on_page_change: Callback<u32>,
    /// Called with the new page size
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    let current = move || meta.get().current_page;
    let last = move || meta.get().last_page.max(1);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || meta.get().range_label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !meta.get().has_prev()
                title="Halaman pertama"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let m = meta.get_untracked();
                    if m.has_prev() {
                        on_page_change.run(m.current_page - 1);
                    }
                }
                disabled=move || !meta.get().has_prev()
                title="Halaman sebelumnya"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-page">{move || format!("{} / {}", current(), last())}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let m = meta.get_untracked();
                    if m.has_next() {
                        on_page_change.run(m.current_page + 1);
                    }
                }
                disabled=move || !meta.get().has_next()
                title="Halaman berikutnya"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(meta.get_untracked().last_page.max(1))
                disabled=move || !meta.get().has_next()
                title="Halaman terakhir"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || meta.get().per_page.to_string()
            >
                {PAGE_SIZE_OPTIONS
                    .iter()
                    .map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || meta.get().per_page == size>
                                {format!("{} / halaman", size)}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
