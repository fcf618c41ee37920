use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    /// Called on Escape, overlay click or the close button
    on_close: Callback<()>,
    /// Buttons shown in the footer (Simpan, Batal...)
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: Option<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Hapus".to_string());
    let footer: ChildrenFn = std::sync::Arc::new(move || {
        let label = confirm_label.clone();
        view! {
            <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                "Batal"
            </button>
            <button class="button button--danger" on:click=move |_| on_confirm.run(())>
                {icon("delete")}
                {label}
            </button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
