use crate::system::roles::api;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use contracts::system::roles::{PermissionItem, RoleDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct RoleDetailsViewModel {
    pub form: RwSignal<RoleDto>,
    pub catalogue: RwSignal<Vec<PermissionItem>>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl RoleDetailsViewModel {
    pub fn new(initial: RoleDto) -> Self {
        Self {
            form: RwSignal::new(initial),
            catalogue: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    pub fn load_permissions(&self) {
        let this = *self;
        spawn_local(async move {
            match api::fetch_permissions().await {
                Ok(items) => this.catalogue.set(items),
                Err(e) => this.error.set(Some(format!("Gagal memuat daftar izin: {}", e))),
            }
        });
    }

    pub fn is_granted(&self, permission: &str) -> bool {
        self.form.with(|f| f.permissions.iter().any(|p| p == permission))
    }

    pub fn set_granted(&self, permission: &str, granted: bool) {
        self.form.update(|f| f.toggle(permission, granted));
    }

    /// Grants or revokes a whole subject group at once.
    pub fn set_group(&self, names: &[String], granted: bool) {
        self.form.update(|f| {
            for name in names {
                f.toggle(name, granted);
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if dto.name.trim().is_empty() {
            self.error.set(Some("Nama role wajib diisi".to_string()));
            return;
        }

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        this.field_errors.set(None);
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(ApiError::Validation(errors)) => {
                    this.error.set(errors.unclaimed_message(&["name", "permissions"]));
                    this.field_errors.set(Some(errors));
                }
                Err(e) => this.error.set(Some(e.to_string())),
            }
            this.saving.set(false);
        });
    }
}
