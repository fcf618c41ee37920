//! Page table: tab key, title, sidebar icon and the permission gating it.
//! Every tab key the shell can open is listed here.

use contracts::system::auth::permissions::{self, Actor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDef {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// `None`: any signed-in user.
    pub permission: Option<&'static str>,
}

pub const PAGES: [PageDef; 8] = [
    PageDef { key: "products", title: "Produk", icon: "products", permission: Some("view-product") },
    PageDef { key: "categories", title: "Kategori", icon: "categories", permission: Some("view-category") },
    PageDef { key: "suppliers", title: "Supplier", icon: "suppliers", permission: Some("view-supplier") },
    PageDef { key: "purchases", title: "Pembelian", icon: "purchases", permission: Some("view-purchase") },
    PageDef { key: "sales", title: "Riwayat Penjualan", icon: "sales", permission: Some("view-sale") },
    PageDef { key: "users", title: "Pengguna", icon: "users", permission: Some("manage-users") },
    PageDef { key: "roles", title: "Role & Izin", icon: "roles", permission: Some("manage-roles") },
    PageDef { key: "notifications", title: "Notifikasi", icon: "bell", permission: None },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub pages: &'static [&'static str],
}

pub const MENU_GROUPS: [MenuGroup; 3] = [
    MenuGroup { id: "master", label: "Data Master", icon: "products", pages: &["products", "categories", "suppliers"] },
    MenuGroup { id: "transactions", label: "Transaksi", icon: "sales", pages: &["purchases", "sales"] },
    MenuGroup { id: "settings", label: "Pengaturan", icon: "roles", pages: &["users", "roles"] },
];

pub fn page_def(key: &str) -> Option<&'static PageDef> {
    PAGES.iter().find(|p| p.key == key)
}

pub fn tab_label_for_key(key: &str) -> &'static str {
    page_def(key).map(|p| p.title).unwrap_or("Halaman")
}

impl PageDef {
    pub fn is_visible_to(&self, actor: Option<&Actor>) -> bool {
        match self.permission {
            Some(permission) => permissions::has_access(actor, permission),
            None => actor.is_some(),
        }
    }
}

impl MenuGroup {
    /// Pages of this group the actor may open; empty hides the group.
    pub fn visible_pages(&self, actor: Option<&Actor>) -> Vec<&'static PageDef> {
        self.pages
            .iter()
            .filter_map(|key| page_def(key))
            .filter(|page| page.is_visible_to(actor))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kasir() -> Actor {
        Actor::from_value(&json!({
            "user": { "id": 9, "name": "Kasir", "roles": [{ "id": 5, "name": "kasir" }],
                      "permissions_list": ["view-sale", "view-product"] }
        }))
        .unwrap()
    }

    #[test]
    fn test_every_group_page_is_registered() {
        for group in MENU_GROUPS {
            for key in group.pages {
                assert!(page_def(key).is_some(), "{} missing", key);
            }
        }
    }

    #[test]
    fn test_visible_pages_follow_permissions() {
        let actor = kasir();
        let master: Vec<_> = MENU_GROUPS[0].visible_pages(Some(&actor)).iter().map(|p| p.key).collect();
        assert_eq!(master, vec!["products"]);
        let transactions: Vec<_> = MENU_GROUPS[1].visible_pages(Some(&actor)).iter().map(|p| p.key).collect();
        assert_eq!(transactions, vec!["sales"]);
        assert!(MENU_GROUPS[2].visible_pages(Some(&actor)).is_empty());
    }

    #[test]
    fn test_admin_sees_everything() {
        let admin = Actor::from_value(&json!({ "user": { "id": 1, "name": "A", "roles": [{ "id": 1, "name": "admin" }] } })).unwrap();
        let total: usize = MENU_GROUPS.iter().map(|g| g.visible_pages(Some(&admin)).len()).sum();
        assert_eq!(total, 7);
    }

    #[test]
    fn test_no_actor_sees_nothing() {
        assert!(MENU_GROUPS.iter().all(|g| g.visible_pages(None).is_empty()));
        assert!(!page_def("notifications").unwrap().is_visible_to(None));
    }

    #[test]
    fn test_unknown_key_label() {
        assert_eq!(tab_label_for_key("products"), "Produk");
        assert_eq!(tab_label_for_key("nope"), "Halaman");
    }
}
