use crate::domain::a001_category::api;
use contracts::domain::a001_category::CategoryDto;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CategoryDetailsViewModel {
    pub form: RwSignal<CategoryDto>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl CategoryDetailsViewModel {
    pub fn new(initial: CategoryDto) -> Self {
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

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if current.name.trim().is_empty() {
            self.error.set(Some("Nama kategori wajib diisi".to_string()));
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
                    this.error.set(errors.unclaimed_message(&["name", "description"]));
                    this.field_errors.set(Some(errors));
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.saving.set(false);
        });
    }
}
