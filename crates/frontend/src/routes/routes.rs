use crate::layout::center::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::notifications::badge::provide_unread_badge;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();
    provide_unread_badge();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.restored)
            fallback=|| view! { <div class="app-loading">"Memuat..."</div> }
        >
            <Show
                when=move || auth_state.with(|s| s.is_authenticated())
                fallback=|| view! { <LoginPage /> }
            >
                <MainLayout />
            </Show>
        </Show>
    }
}
