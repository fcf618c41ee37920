//! Top bar: sidebar toggle, brand, notification bell, theme selector,
//! signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use crate::system::auth::context::{do_logout, use_auth};
use crate::system::notifications::ui::bell::NotificationBell;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        spawn_local(async move {
            do_logout(set_auth_state).await;
            ctx.close_all();
        });
    };

    let user_label = move || {
        auth_state.with(|s| {
            s.actor
                .as_ref()
                .map(|a| match a.roles().first() {
                    Some(role) => format!("{} ({})", a.name, role),
                    None => a.name.clone(),
                })
                .unwrap_or_default()
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Sembunyikan menu" } else { "Tampilkan menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Apotek POS"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell />
                <ThemeSelector />
                <div class="top-header__user">
                    {icon("users")}
                    <span>{user_label}</span>
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Keluar">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
