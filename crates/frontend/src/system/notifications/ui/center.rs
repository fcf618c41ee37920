//! Notification centre tab: filter by type, unread and text; mark read,
//! mark all read and delete.
//!
//! Actions are fire-and-forget: a failure is logged and the list is
//! reloaded either way.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::pages::{page_def, tab_label_for_key};
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::notifications::api;
use crate::system::notifications::badge::use_unread_badge;
use contracts::shared::api_error::ApiError;
use contracts::system::notifications::{unread_in, Notification, NotificationFilter, NotificationType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Tab key for a notification link such as `/products/7`.
pub fn tab_key_for_link(link: &str) -> Option<&'static str> {
    let first = link.trim_start_matches('/').split(['/', '?', '#']).next()?;
    page_def(first).map(|p| p.key)
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let badge = use_unread_badge();
    let list = ListState::<Notification>::new(api::fetch_page);
    let criteria = RwSignal::new(NotificationFilter::default());

    let visible = Memo::new(move |_| list.rows.with(|rows| criteria.with(|c| c.apply(rows))));
    let unread_on_page = move || list.rows.with(|rows| unread_in(rows));

    let run = move |label: &'static str, action: std::pin::Pin<Box<dyn Future<Output = Result<(), ApiError>>>>| {
        spawn_local(async move {
            if let Err(e) = action.await {
                log::warn!("{} failed: {}", label, e);
            }
            list.reload();
            badge.refresh();
        });
    };

    let open = move |n: &Notification| {
        if n.unread {
            run("mark read", Box::pin(api::mark_read(n.id)));
        }
        if let Some(key) = n.link.as_deref().and_then(tab_key_for_link) {
            ctx.open_tab(key, tab_label_for_key(key));
        }
    };

    let on_type = move |ev: leptos::ev::Event| {
        let kind = NotificationType::parse(&event_target_value(&ev));
        criteria.update(|c| c.kind = kind);
    };

    view! {
        <div class="page">
            <PageHeader title="Notifikasi" subtitle="Pemberitahuan stok, kedaluwarsa dan transaksi".to_string()>
                <SearchInput
                    value=Signal::derive(move || criteria.with(|c| c.query.clone()))
                    on_input=Callback::new(move |v: String| criteria.update(|c| c.query = v))
                    placeholder="Cari notifikasi..."
                />
                <select class="select" on:change=on_type>
                    <option value="" selected=true>"Semua jenis"</option>
                    {NotificationType::all().into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.label()}</option>
                    }).collect_view()}
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || criteria.with(|c| c.unread_only)
                        on:change=move |ev| criteria.update(|c| c.unread_only = event_target_checked(&ev))
                    />
                    <span>"Belum dibaca saja"</span>
                </label>
                <button
                    class="button button--secondary"
                    disabled=move || unread_on_page() == 0
                    on:click=move |_| run("mark all read", Box::pin(api::mark_all_read()))
                >
                    {icon("check")}
                    "Tandai semua dibaca"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Muat ulang"
                </button>
            </PageHeader>

            <ErrorBanner message=list.error />

            <ul class="notification-list">
                {move || {
                    let query = criteria.with(|c| c.query.clone());
                    visible.get().into_iter().map(|n| {
                        let id = n.id;
                        let unread = n.unread;
                        let item_class = if unread { "notification-list__item notification-list__item--unread" } else { "notification-list__item" };
                        let for_open = n.clone();
                        view! {
                            <li class=item_class>
                                <div class="notification-list__body" on:click=move |_| open(&for_open)>
                                    <span class="notification-list__type">{n.kind.label()}</span>
                                    <strong class="notification-list__title">{highlight_matches(&n.title, &query)}</strong>
                                    <p class="notification-list__description">{highlight_matches(&n.description, &query)}</p>
                                    <span class="notification-list__time">{n.time.clone()}</span>
                                </div>
                                <div class="notification-list__actions">
                                    {unread.then(|| view! {
                                        <button class="button button--icon" title="Tandai dibaca"
                                            on:click=move |_| run("mark read", Box::pin(api::mark_read(id)))>
                                            {icon("eye")}
                                        </button>
                                    })}
                                    <button class="button button--icon button--danger" title="Hapus"
                                        on:click=move |_| run("delete notification", Box::pin(api::remove(id)))>
                                        {icon("delete")}
                                    </button>
                                </div>
                            </li>
                        }
                    }).collect_view()
                }}
            </ul>
            <Show when=move || !list.loading.get() && visible.with(|v| v.is_empty())>
                <div class="table__empty">
                    {move || if criteria.with(|c| c.is_active()) { "Tidak ada notifikasi yang cocok" } else { "Belum ada notifikasi" }}
                </div>
            </Show>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_key_for_link() {
        assert_eq!(tab_key_for_link("/products/7"), Some("products"));
        assert_eq!(tab_key_for_link("purchases?id=3"), Some("purchases"));
        assert_eq!(tab_key_for_link("/sales"), Some("sales"));
        assert_eq!(tab_key_for_link("/dashboard"), None);
        assert_eq!(tab_key_for_link(""), None);
    }
}
