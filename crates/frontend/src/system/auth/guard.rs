use leptos::prelude::*;

use super::context::use_can;

/// Renders children only when the current actor has access to `permission`.
///
/// Display gate only; the server enforces the same rule on the request.
#[component]
pub fn Can(
    permission: &'static str,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let allowed = use_can(permission);

    view! {
        <Show when=move || allowed.get() fallback=fallback>
            {children()}
        </Show>
    }
}

/// Page-level gate with an explanatory fallback.
#[component]
pub fn RequireAccess(permission: &'static str, children: ChildrenFn) -> impl IntoView {
    let allowed = use_can(permission);

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="warning-box">"Akses ditolak. Anda tidak memiliki izin untuk halaman ini."</div> }
        >
            {children()}
        </Show>
    }
}
