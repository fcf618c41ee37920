use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

/// First server validation message for `field`, rendered under the input
#[component]
pub fn FieldError(
    #[prop(into)] errors: Signal<Option<ValidationErrors>>,
    field: &'static str,
) -> impl IntoView {
    move || {
        errors
            .get()
            .and_then(|e| e.first(field).map(str::to_string))
            .map(|msg| view! { <div class="form__error">{msg}</div> })
    }
}

/// Page-level error banner
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|msg| view! { <div class="alert alert--error">{msg}</div> })
    }
}
