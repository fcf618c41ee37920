use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHeader(tab: TabData) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| tabs_store.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key_for_close);
    };

    view! {
        <div
            class="tabs__header"
            class:tabs__header--active=is_active
            on:click=move |_| tabs_store.activate_tab(&key_for_click)
        >
            <span>{tab.title}</span>
            <button class="tabs__close" on:click=on_close title="Tutup">{icon("x")}</button>
        </div>
    }
}

/// Centre zone: tab strip and the open pages.
#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="tabs">
            <div class="tabs__bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabHeader tab=tab /> }
                />
            </div>
            <div class="tabs__content">
                <Show
                    when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())
                    fallback=|| view! {
                        <div class="tabs__empty">"Pilih menu di samping untuk membuka halaman."</div>
                    }
                >
                    <For
                        each=move || tabs_store.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    />
                </Show>
            </div>
        </div>
    }
}
