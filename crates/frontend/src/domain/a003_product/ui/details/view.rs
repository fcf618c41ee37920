use super::view_model::ProductDetailsViewModel;
use crate::shared::components::table::format_rupiah;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_product::ProductForm;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn ProductDetails(
    initial: ProductForm,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(initial);
    vm.load_categories();
    let title = if vm.is_edit_mode() { "Edit Produk" } else { "Tambah Produk" };

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
                    <label for="product-name">"Nama Produk"</label>
                    <input
                        type="text"
                        id="product-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                        placeholder="mis. Paracetamol 500mg"
                    />
                    <FieldError errors=vm.field_errors field="name" />
                </div>

                <div class="form-group">
                    <label for="product-category">"Kategori"</label>
                    <select
                        id="product-category"
                        prop:value=move || vm.form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| vm.set_category(event_target_value(&ev))
                    >
                        <option value="">"-- Pilih kategori --"</option>
                        {move || vm.categories.get().into_iter().map(|c| {
                            let value = c.id.to_string();
                            let selected = vm.form.with(|f| f.category_id == Some(c.id));
                            view! { <option value=value selected=selected>{c.name}</option> }
                        }).collect_view()}
                    </select>
                    <FieldError errors=vm.field_errors field="category_id" />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="product-purchase-price">"Harga Beli"</label>
                        <input
                            type="number"
                            id="product-purchase-price"
                            min="0"
                            step="any"
                            prop:value=move || vm.form.with(|f| f.purchase_price().to_string())
                            on:input=move |ev| vm.set_purchase_price(event_target_value(&ev))
                        />
                        <FieldError errors=vm.field_errors field="harga_beli" />
                    </div>
                    <div class="form-group">
                        <label for="product-margin">"Margin (%)"</label>
                        <input
                            type="number"
                            id="product-margin"
                            min="0"
                            step="any"
                            prop:value=move || vm.form.with(|f| f.margin().to_string())
                            on:input=move |ev| vm.set_margin(event_target_value(&ev))
                        />
                        <FieldError errors=vm.field_errors field="margin" />
                    </div>
                    <div class="form-group">
                        <label for="product-sale-price">"Harga Jual"</label>
                        <input
                            type="text"
                            id="product-sale-price"
                            class="form-input--readonly"
                            readonly=true
                            tabindex="-1"
                            prop:value=move || format_rupiah(vm.sale_price() as f64)
                        />
                        <FieldError errors=vm.field_errors field="harga" />
                    </div>
                </div>

                <div class="form-group">
                    <label for="product-description">"Deskripsi"</label>
                    <textarea
                        id="product-description"
                        rows="3"
                        prop:value=move || vm.form.with(|f| f.description.clone())
                        on:input=move |ev| vm.form.update(|f| f.description = event_target_value(&ev))
                    />
                    <FieldError errors=vm.field_errors field="description" />
                </div>
            </div>
        </Modal>
    }
}
