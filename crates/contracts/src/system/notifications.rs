//! Server-generated notifications. The client only reads, marks read and
//! deletes them.

use crate::shared::filter::Searchable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    LowStock,
    Expiry,
    Purchase,
    Sale,
    System,
    #[serde(other)]
    Other,
}

impl NotificationType {
    pub fn all() -> [NotificationType; 6] {
        [
            NotificationType::LowStock,
            NotificationType::Expiry,
            NotificationType::Purchase,
            NotificationType::Sale,
            NotificationType::System,
            NotificationType::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::LowStock => "low_stock",
            NotificationType::Expiry => "expiry",
            NotificationType::Purchase => "purchase",
            NotificationType::Sale => "sale",
            NotificationType::System => "system",
            NotificationType::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationType::LowStock => "Stok menipis",
            NotificationType::Expiry => "Kedaluwarsa",
            NotificationType::Purchase => "Pembelian",
            NotificationType::Sale => "Penjualan",
            NotificationType::System => "Sistem",
            NotificationType::Other => "Lainnya",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Already formatted by the server ("5 menit yang lalu").
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub unread: bool,
    #[serde(default)]
    pub link: Option<String>,
}

impl Searchable for Notification {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

/// Filter of the notification centre over the fetched page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFilter {
    pub kind: Option<NotificationType>,
    pub unread_only: bool,
    pub query: String,
}

impl NotificationFilter {
    pub fn matches(&self, n: &Notification) -> bool {
        self.kind.map_or(true, |k| n.kind == k)
            && (!self.unread_only || n.unread)
            && n.matches_filter(&self.query)
    }

    pub fn apply(&self, items: &[Notification]) -> Vec<Notification> {
        items.iter().filter(|n| self.matches(n)).cloned().collect()
    }

    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.unread_only || !self.query.trim().is_empty()
    }
}

pub fn unread_in(items: &[Notification]) -> usize {
    items.iter().filter(|n| n.unread).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pagination::Paginated;
    use serde_json::json;

    fn page() -> Paginated<Notification> {
        serde_json::from_value(json!({
            "data": [
                { "id": "0b6d9a52-6a61-4b3f-a3c2-6f1f0e1d2a01", "type": "low_stock", "title": "Stok Paracetamol menipis",
                  "description": "Sisa 3 strip", "time": "5 menit yang lalu", "unread": true, "link": "/products/7" },
                { "id": "0b6d9a52-6a61-4b3f-a3c2-6f1f0e1d2a02", "type": "expiry", "title": "Amoxicillin kedaluwarsa",
                  "description": "Batch A12 kedaluwarsa 30 hari lagi", "time": "1 jam yang lalu", "unread": false, "link": null },
                { "id": "0b6d9a52-6a61-4b3f-a3c2-6f1f0e1d2a03", "type": "low_stock", "title": "Stok Vitamin C menipis",
                  "description": "Sisa 1 botol", "time": "2 jam yang lalu", "unread": false },
                { "id": "0b6d9a52-6a61-4b3f-a3c2-6f1f0e1d2a04", "type": "backup_done", "title": "Backup selesai",
                  "time": "kemarin", "unread": true }
            ],
            "meta": { "current_page": 1, "last_page": 1, "total": 4 }
        }))
        .unwrap()
    }

    #[test]
    fn test_unknown_type_maps_to_other() {
        let p = page();
        assert_eq!(p.data[3].kind, NotificationType::Other);
        assert_eq!(p.data[3].description, "");
        assert_eq!(p.meta.total, 4);
    }

    #[test]
    fn test_filter_combinations() {
        let items = page().data;

        let by_type = NotificationFilter {
            kind: Some(NotificationType::LowStock),
            ..Default::default()
        };
        assert_eq!(by_type.apply(&items).len(), 2);

        let unread_low_stock = NotificationFilter {
            kind: Some(NotificationType::LowStock),
            unread_only: true,
            ..Default::default()
        };
        let result = unread_low_stock.apply(&items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Stok Paracetamol menipis");

        let by_text = NotificationFilter {
            query: "batch".into(),
            ..Default::default()
        };
        assert_eq!(by_text.apply(&items).len(), 1);

        assert_eq!(NotificationFilter::default().apply(&items).len(), 4);
        assert!(!NotificationFilter::default().is_active());
        assert!(by_text.is_active());
    }

    #[test]
    fn test_unread_count() {
        assert_eq!(unread_in(&page().data), 2);
    }

    #[test]
    fn test_type_round_trip_names() {
        for t in NotificationType::all() {
            assert_eq!(NotificationType::parse(t.as_str()), Some(t));
        }
        assert_eq!(NotificationType::parse(""), None);
    }
}
