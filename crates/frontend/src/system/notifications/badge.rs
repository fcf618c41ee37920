//! Unread counter shared by the header bell and the notification centre.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;

#[derive(Clone, Copy)]
pub struct UnreadBadge {
    pub count: RwSignal<u64>,
}

impl UnreadBadge {
    pub fn new() -> Self {
        Self {
            count: RwSignal::new(0),
        }
    }

    /// Re-reads the count from the server. A failed poll keeps the last value.
    pub fn refresh(&self) {
        let count = self.count;
        spawn_local(async move {
            match api::unread_count().await {
                Ok(n) => count.set(n),
                Err(e) => log::debug!("unread count poll failed: {}", e),
            }
        });
    }

    pub fn label(&self) -> Option<String> {
        badge_label(self.count.get())
    }
}

impl Default for UnreadBadge {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_unread_badge() -> UnreadBadge {
    let badge = UnreadBadge::new();
    provide_context(badge);
    badge
}

pub fn use_unread_badge() -> UnreadBadge {
    use_context::<UnreadBadge>().expect("UnreadBadge not provided")
}

/// Text of the bell badge: hidden at zero, capped at "99+".
pub fn badge_label(count: u64) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }
}
