//! Sidebar with collapsible menu groups. Groups and pages the actor may not
//! open are not rendered.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::pages::{MenuGroup, PageDef, MENU_GROUPS};
use crate::shared::icons::icon;
use crate::system::auth::context::use_actor;
use leptos::prelude::*;

#[component]
fn SidebarItem(page: &'static PageDef) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div
            class="app-sidebar__item app-sidebar__item--child"
            class:app-sidebar__item--active=move || ctx.active.get().as_deref() == Some(page.key)
            on:click=move |_| ctx.open_tab(page.key, page.title)
        >
            <div class="app-sidebar__item-content">
                {icon(page.icon)}
                <span>{page.title}</span>
            </div>
        </div>
    }
}

#[component]
fn SidebarGroup(group: MenuGroup, pages: Vec<&'static PageDef>, expanded: RwSignal<Vec<&'static str>>) -> impl IntoView {
    let is_expanded = move || expanded.with(|ids| ids.contains(&group.id));

    view! {
        <div class="app-sidebar__group">
            <div
                class="app-sidebar__item"
                on:click=move |_| {
                    expanded.update(|ids| {
                        if let Some(pos) = ids.iter().position(|id| *id == group.id) {
                            ids.remove(pos);
                        } else {
                            ids.push(group.id);
                        }
                    })
                }
            >
                <div class="app-sidebar__item-content">
                    {icon(group.icon)}
                    <span>{group.label}</span>
                </div>
                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {pages.iter().map(|&page| view! { <SidebarItem page=page /> }).collect_view()}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let actor = use_actor();
    let expanded = RwSignal::new(MENU_GROUPS.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <nav class="app-sidebar" class:app-sidebar--hidden=move || !ctx.left_open.get()>
            <div class="app-sidebar__brand">{icon("products")}<span>"Apotek"</span></div>
            {move || {
                actor.with(|actor| {
                    MENU_GROUPS
                        .iter()
                        .filter_map(|group| {
                            let pages = group.visible_pages(actor.as_ref());
                            (!pages.is_empty()).then(|| view! {
                                <SidebarGroup group=*group pages=pages expanded=expanded />
                            })
                        })
                        .collect_view()
                })
            }}
        </nav>
    }
}
