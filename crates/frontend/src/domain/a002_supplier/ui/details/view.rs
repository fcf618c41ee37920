use super::view_model::SupplierDetailsViewModel;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_supplier::SupplierDto;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
fn TextField(
    vm: SupplierDetailsViewModel,
    field: &'static str,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
) -> impl IntoView {
    let id = format!("supplier-{}", field);
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input
                type=input_type.unwrap_or("text")
                id=id
                prop:value=move || vm.field(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
            <FieldError errors=vm.field_errors field=field />
        </div>
    }
}

#[component]
pub fn SupplierDetails(
    initial: SupplierDto,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial);
    let title = if vm.is_edit_mode() { "Edit Supplier" } else { "Tambah Supplier" };

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
                <TextField vm=vm field="name" label="Nama" />
                <TextField vm=vm field="phone" label="Telepon" input_type="tel" />
                <TextField vm=vm field="email" label="Email" input_type="email" />
                <div class="form-group">
                    <label for="supplier-address">"Alamat"</label>
                    <textarea
                        id="supplier-address"
                        rows="3"
                        prop:value=move || vm.field("address")
                        on:input=move |ev| vm.set_field("address", event_target_value(&ev))
                    />
                    <FieldError errors=vm.field_errors field="address" />
                </div>
            </div>
        </Modal>
    }
}
