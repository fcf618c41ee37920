use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a001_category::CategoryDto;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn CategoryDetails(
    initial: CategoryDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(initial);
    let title = if vm.is_edit_mode() { "Edit Kategori" } else { "Tambah Kategori" };

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                {icon("cancel")}
                "Batal"
            </button>
            <button
                class="button button--primary"
                on:click=move |_| vm.save_command(on_saved)
                disabled=move || !vm.is_form_valid() || vm.saving.get()
            >
                {icon("save")}
                {move || if vm.saving.get() { "Menyimpan..." } else { "Simpan" }}
            </button>
        }
        .into_any()
    });

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <ErrorBanner message=vm.error />
            <div class="details-form">
                <div class="form-group">
                    <label for="category-name">"Nama"</label>
                    <input
                        type="text"
                        id="category-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="mis. Obat Bebas"
                    />
                    <FieldError errors=vm.field_errors field="name" />
                </div>
                <div class="form-group">
                    <label for="category-description">"Deskripsi"</label>
                    <textarea
                        id="category-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.description = if value.trim().is_empty() { None } else { Some(value) };
                            });
                        }
                    />
                    <FieldError errors=vm.field_errors field="description" />
                </div>
            </div>
        </Modal>
    }
}
