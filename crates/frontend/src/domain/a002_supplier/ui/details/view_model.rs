use crate::domain::a002_supplier::api;
use contracts::domain::a002_supplier::SupplierDto;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const FIELDS: [&str; 4] = ["name", "phone", "email", "address"];

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<SupplierDto>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

/// Empty input is sent as `null`.
fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl SupplierDetailsViewModel {
    pub fn new(initial: SupplierDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn is_form_valid(&self) -> bool {
        self.form.with(|f| !f.name.trim().is_empty())
    }

    pub fn set_field(&self, field: &str, value: String) {
        self.form.update(|f| match field {
            "name" => f.name = value,
            "phone" => f.phone = optional(value),
            "email" => f.email = optional(value),
            "address" => f.address = optional(value),
            _ => {}
        });
    }

    pub fn field(&self, field: &str) -> String {
        self.form.with(|f| match field {
            "name" => f.name.clone(),
            "phone" => f.phone.clone().unwrap_or_default(),
            "email" => f.email.clone().unwrap_or_default(),
            "address" => f.address.clone().unwrap_or_default(),
            _ => String::new(),
        })
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() {
            self.error.set(Some("Nama supplier wajib diisi".to_string()));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.field_errors.set(None);
        spawn_local(async move {
            match api::save(&current).await {
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
