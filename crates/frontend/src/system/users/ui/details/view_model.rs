use crate::system::roles;
use crate::system::users::api;
use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use contracts::system::roles::RoleDetail;
use contracts::system::users::UserForm;
use leptos::prelude::*;
use leptos::task::spawn_local;

const FIELDS: [&str; 5] = ["name", "email", "password", "password_confirmation", "roles"];

#[derive(Clone, Copy)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserForm>,
    pub roles: RwSignal<Vec<RoleDetail>>,
    pub error: RwSignal<Option<String>>,
    pub field_errors: RwSignal<Option<ValidationErrors>>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsViewModel {
    pub fn new(initial: UserForm) -> Self {
        Self {
            form: RwSignal::new(initial),
            roles: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            field_errors: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn load_roles(&self) {
        let this = *self;
        spawn_local(async move {
            match roles::api::fetch_options().await {
                Ok(list) => this.roles.set(list),
                Err(e) => this.error.set(Some(format!("Gagal memuat role: {}", e))),
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Some(problem) = current.problem() {
            self.error.set(Some(problem.to_string()));
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
