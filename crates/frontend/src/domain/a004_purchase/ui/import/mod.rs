//! Purchase import dialog: supplier + invoice file, uploaded as multipart.

use crate::domain::a002_supplier;
use crate::domain::a004_purchase::api;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a004_purchase::aggregate::{is_importable_file, IMPORT_EXTENSIONS};
use contracts::domain::a004_purchase::PurchaseImportResult;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

#[derive(Clone, Copy)]
struct ImportViewModel {
    suppliers: RwSignal<Vec<Supplier>>,
    supplier_id: RwSignal<Option<i64>>,
    file_name: RwSignal<Option<String>>,
    // web_sys::File is not Send
    file: StoredValue<Option<File>, LocalStorage>,
    result: RwSignal<Option<PurchaseImportResult>>,
    error: RwSignal<Option<String>>,
    field_errors: RwSignal<Option<ValidationErrors>>,
    uploading: RwSignal<bool>,
}

impl ImportViewModel {
    fn new() -> Self {
        Self {
            suppliers: RwSignal::new(Vec::new()),
            supplier_id: RwSignal::new(None),
            file_name: RwSignal::new(None),
            file: StoredValue::new_local(None),
            result: RwSignal::new(None),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(None),
            uploading: RwSignal::new(false),
        }
    }

    fn load_suppliers(&self) {
        let this = *self;
        spawn_local(async move {
            match a002_supplier::api::fetch_options().await {
                Ok(list) => this.suppliers.set(list),
                Err(e) => this.error.set(Some(format!("Gagal memuat supplier: {}", e))),
            }
        });
    }

    fn select_file(&self, file: Option<File>) {
        self.result.set(None);
        match file {
            Some(f) if is_importable_file(&f.name()) => {
                self.error.set(None);
                self.file_name.set(Some(f.name()));
                self.file.set_value(Some(f));
            }
            Some(f) => {
                self.error.set(Some(format!(
                    "Format file {} tidak didukung (gunakan {})",
                    f.name(),
                    IMPORT_EXTENSIONS.join(", ")
                )));
                self.file_name.set(None);
                self.file.set_value(None);
            }
            None => {
                self.file_name.set(None);
                self.file.set_value(None);
            }
        }
    }

    fn can_submit(&self) -> bool {
        self.supplier_id.get().is_some() && self.file_name.get().is_some() && !self.uploading.get()
    }

    fn submit(&self, on_imported: Callback<()>) {
        let (Some(supplier_id), Some(file)) = (self.supplier_id.get_untracked(), self.file.get_value()) else {
            return;
        };
        if self.uploading.get_untracked() {
            return;
        }

        let this = *self;
        this.uploading.set(true);
        this.error.set(None);
        this.field_errors.set(None);
        spawn_local(async move {
            match api::import(supplier_id, &file).await {
                Ok(result) => {
                    log::info!("purchase import: {}", result.summary());
                    this.result.set(Some(result));
                    on_imported.run(());
                }
                Err(ApiError::Validation(errors)) => {
                    this.error.set(errors.unclaimed_message(&["supplier_id", "file"]));
                    this.field_errors.set(Some(errors));
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.uploading.set(false);
        });
    }
}

#[component]
pub fn PurchaseImport(
    /// Called after every successful upload (the list reloads)
    on_imported: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = ImportViewModel::new();
    vm.load_suppliers();

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <button class="button button--secondary" on:click=move |_| on_close.run(())>
                "Tutup"
            </button>
            <button
                class="button button--primary"
                on:click=move |_| vm.submit(on_imported)
                disabled=move || !vm.can_submit()
            >
                {icon("upload")}
                {move || if vm.uploading.get() { "Mengunggah..." } else { "Impor" }}
            </button>
        }
        .into_any()
    });

    view! {
        <Modal title="Impor Pembelian" on_close=on_close footer=footer>
            <ErrorBanner message=vm.error />
            <div class="details-form">
                <div class="form-group">
                    <label for="import-supplier">"Supplier"</label>
                    <select
                        id="import-supplier"
                        on:change=move |ev| vm.supplier_id.set(event_target_value(&ev).parse::<i64>().ok())
                    >
                        <option value="">"-- Pilih supplier --"</option>
                        {move || vm.suppliers.get().into_iter().map(|s| {
                            let selected = vm.supplier_id.get() == Some(s.id);
                            view! { <option value=s.id.to_string() selected=selected>{s.name}</option> }
                        }).collect_view()}
                    </select>
                    <FieldError errors=vm.field_errors field="supplier_id" />
                </div>

                <div class="form-group">
                    <label for="import-file">"File faktur"</label>
                    <input
                        type="file"
                        id="import-file"
                        accept=".xlsx,.xls,.csv"
                        on:change=move |ev| {
                            let file = ev
                                .target()
                                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                                .and_then(|input| input.files())
                                .and_then(|files| files.get(0));
                            vm.select_file(file);
                        }
                    />
                    <FieldError errors=vm.field_errors field="file" />
                </div>

                {move || vm.result.get().map(|r| {
                    let errors = r.errors.clone();
                    view! {
                        <div class="import-result" class:import-result--clean=r.is_clean()>
                            <div class="import-result__summary">{icon("check")}{r.summary()}</div>
                            <ul class="import-result__errors">
                                {errors.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                            </ul>
                        </div>
                    }
                })}
            </div>
        </Modal>
    }
}
