use super::view_model::UserDetailsViewModel;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::system::users::UserForm;
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn UserDetails(initial: UserForm, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = UserDetailsViewModel::new(initial);
    vm.load_roles();
    let is_edit = vm.is_edit_mode();
    let title = if is_edit { "Edit Pengguna" } else { "Tambah Pengguna" };

    let footer: ChildrenFn = Arc::new(move || {
        view! {
            <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                {icon("cancel")}
                "Batal"
            </button>
            <button
                class="button button--primary"
                on:click=move |_| vm.save_command(on_saved)
                disabled=move || vm.saving.get()
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
                    <label for="user-name">"Nama"</label>
                    <input
                        type="text"
                        id="user-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=vm.field_errors field="name" />
                </div>
                <div class="form-group">
                    <label for="user-email">"Email"</label>
                    <input
                        type="email"
                        id="user-email"
                        prop:value=move || vm.form.with(|f| f.email.clone())
                        on:input=move |ev| vm.form.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldError errors=vm.field_errors field="email" />
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="user-password">"Kata sandi"</label>
                        <input
                            type="password"
                            id="user-password"
                            placeholder=if is_edit { "Kosongkan jika tidak diubah" } else { "" }
                            prop:value=move || vm.form.with(|f| f.password.clone())
                            on:input=move |ev| vm.form.update(|f| f.password = event_target_value(&ev))
                        />
                        <FieldError errors=vm.field_errors field="password" />
                    </div>
                    <div class="form-group">
                        <label for="user-password-confirmation">"Konfirmasi kata sandi"</label>
                        <input
                            type="password"
                            id="user-password-confirmation"
                            prop:value=move || vm.form.with(|f| f.password_confirmation.clone())
                            on:input=move |ev| vm.form.update(|f| f.password_confirmation = event_target_value(&ev))
                        />
                        <FieldError errors=vm.field_errors field="password_confirmation" />
                    </div>
                </div>
                <fieldset class="form-group">
                    <legend>"Role"</legend>
                    {move || vm.roles.get().into_iter().map(|role| {
                        let name = role.name.clone();
                        let name_for_check = role.name.clone();
                        view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || vm.form.with(|f| f.roles.contains(&name_for_check))
                                    on:change=move |ev| {
                                        let assigned = event_target_checked(&ev);
                                        vm.form.update(|f| f.toggle_role(&name, assigned));
                                    }
                                />
                                <span>{role.name}</span>
                            </label>
                        }
                    }).collect_view()}
                    <FieldError errors=vm.field_errors field="roles" />
                </fieldset>
            </div>
        </Modal>
    }
}
