use crate::domain::a001_category;
use crate::domain::a003_product::api;
use contracts::domain::a001_category::Category;
use contracts::domain::a003_product::ProductForm;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FIELDS: [&str; 6] = ["name", "category_id", "harga_beli", "margin", "harga", "description"];

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductForm>,
    pub categories: RwSignal<Vec<Category>>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(initial: ProductForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            categories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| f.is_valid())
    }

    /// Sale price as shown in the read-only field.
    pub fn sale_price(&self) -> i64 {
        self.form.with(|f| f.sale_price())
    }

    pub fn set_purchase_price(&self, value: String) {
        self.form.update(|f| f.set_purchase_price(value));
    }

    pub fn set_margin(&self, value: String) {
        self.form.update(|f| f.set_margin(value));
    }

    pub fn set_category(&self, value: String) {
        let id = value.parse::<i64>().ok();
        self.form.update(|f| f.category_id = id);
    }

    pub fn load_categories(&self) {
        let categories = self.categories;
        let error = self.error;
        spawn_local(async move {
            match a001_category::api::fetch_options().await {
                Ok(list) => categories.set(list),
                Err(e) => error.set(Some(format!("Gagal memuat kategori: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if !current.is_valid() {
            self.error.set(Some("Nama dan kategori wajib diisi".to_string()));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.field_errors.set(None);
        spawn_local(async move {
            match api::save(current.id, &current.to_payload()).await {
                Ok(()) => on_saved.run(()),
                Err(ApiError::Validation(errors)) => {
                    this.error.set(errors.unclaimed_message(&FIELDS));
                    this.field_errors.set(Some(errors));
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.saving.set(false);
        });
    }
}
