//! Tab content registry: maps a tab key from [`super::pages::PAGES`] to its view.

use super::pages::page_def;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_supplier::ui::list::SupplierList;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_purchase::ui::list::PurchaseList;
use crate::domain::a005_sale::ui::list::SaleList;
use crate::system::auth::guard::RequireAccess;
use crate::system::notifications::ui::center::NotificationCenter;
use crate::system::roles::ui::list::RolesListPage;
use crate::system::users::ui::list::UsersListPage;
use leptos::prelude::*;

fn page_content(key: &str) -> AnyView {
    match key {
        "products" => view! { <ProductList /> }.into_any(),
        "categories" => view! { <CategoryList /> }.into_any(),
        "suppliers" => view! { <SupplierList /> }.into_any(),
        "purchases" => view! { <PurchaseList /> }.into_any(),
        "sales" => view! { <SaleList /> }.into_any(),
        "users" => view! { <UsersListPage /> }.into_any(),
        "roles" => view! { <RolesListPage /> }.into_any(),
        "notifications" => view! { <NotificationCenter /> }.into_any(),
        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Halaman tidak ditemukan"</div> }.into_any()
        }
    }
}

/// Content of the tab `key`, behind its permission gate.
pub fn render_tab_content(key: &str) -> AnyView {
    let key = key.to_string();
    match page_def(&key).and_then(|p| p.permission) {
        Some(permission) => view! {
            <RequireAccess permission=permission>
                {page_content(&key)}
            </RequireAccess>
        }
        .into_any(),
        None => page_content(&key),
    }
}
