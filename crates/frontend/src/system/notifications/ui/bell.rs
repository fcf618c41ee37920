use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::pages::tab_label_for_key;
use crate::shared::config::UNREAD_POLL_MS;
use crate::shared::icons::icon;
use crate::system::notifications::badge::use_unread_badge;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Header bell with the unread badge. Polls the count while mounted and
/// opens the notification centre on click.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let badge = use_unread_badge();

    badge.refresh();
    let poll = StoredValue::new_local(Some(Interval::new(UNREAD_POLL_MS, move || badge.refresh())));
    on_cleanup(move || {
        // dropping the interval cancels it
        poll.update_value(|p| {
            p.take();
        });
    });

    let open_centre = move |_| ctx.open_tab("notifications", tab_label_for_key("notifications"));

    view! {
        <button class="top-header__icon-btn notification-bell" on:click=open_centre title="Notifikasi">
            {icon("bell")}
            {move || badge.label().map(|text| view! { <span class="notification-bell__badge">{text}</span> })}
        </button>
    }
}
