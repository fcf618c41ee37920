use crate::shared::api_utils;
use crate::shared::modal::ConfirmDialog;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Record waiting for delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: i64,
    pub label: String,
}

impl DeleteTarget {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Confirm dialog for `DELETE {resource}/{id}`.
///
/// The dialog closes right after confirmation. Success or failure both end in
/// `on_done` (the list reloads); a failure is only logged.
#[component]
pub fn DeleteConfirm(
    target: RwSignal<Option<DeleteTarget>>,
    /// e.g. "produk"
    entity: &'static str,
    /// e.g. "/api/products"
    resource: &'static str,
    on_done: Callback<()>,
) -> impl IntoView {
    let confirm = Callback::new(move |_| {
        let Some(t) = target.get_untracked() else {
            return;
        };
        target.set(None);
        spawn_local(async move {
            if let Err(e) = api_utils::delete(&format!("{}/{}", resource, t.id)).await {
                log::warn!("deleting {} {} failed: {}", entity, t.id, e);
            }
            on_done.run(());
        });
    });
    let cancel = Callback::new(move |_| target.set(None));

    move || {
        target.get().map(|t| {
            view! {
                <ConfirmDialog
                    title=format!("Hapus {}", entity)
                    message=format!("Hapus {} \"{}\"? Tindakan ini tidak dapat dibatalkan.", entity, t.label)
                    on_confirm=confirm
                    on_cancel=cancel
                />
            }
        })
    }
}
