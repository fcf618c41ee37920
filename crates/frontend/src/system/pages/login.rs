use contracts::shared::api_error::ApiError;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::{ErrorBanner, FieldError};
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (field_errors, set_field_errors) = signal(Option::<ValidationErrors>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        set_is_loading.set(true);
        set_error_message.set(None);
        set_field_errors.set(None);

        spawn_local(async move {
            // On success the auth state switches the shell to the main layout
            match do_login(email_val, password_val, set_auth_state).await {
                Ok(()) => {}
                Err(ApiError::Validation(errors)) => {
                    let unclaimed = errors.unclaimed_message(&["email", "password"]);
                    set_error_message.set(unclaimed);
                    set_field_errors.set(Some(errors));
                }
                Err(ApiError::Unauthenticated) => {
                    set_error_message.set(Some("Email atau kata sandi salah".to_string()));
                }
                Err(e) => set_error_message.set(Some(e.to_string())),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Apotek POS"</h1>
                <h2>"Masuk ke sistem"</h2>

                <ErrorBanner message=error_message />

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="admin@apotek.test"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <FieldError errors=field_errors field="email" />
                    </div>

                    <div class="form-group">
                        <label for="password">"Kata sandi"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                        <FieldError errors=field_errors field="password" />
                    </div>

                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Memproses..." } else { "Masuk" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
