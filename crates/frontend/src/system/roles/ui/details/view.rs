use super::view_model::RoleDetailsViewModel;
use crate::shared::components::{ErrorBanner, FieldError};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::system::roles::{group_permissions, RoleDto};
use leptos::prelude::*;
use std::sync::Arc;

#[component]
pub fn RoleDetails(initial: RoleDto, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = RoleDetailsViewModel::new(initial);
    vm.load_permissions();
    let title = if vm.is_edit_mode() { "Edit Role" } else { "Tambah Role" };

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

    let groups = move || {
        vm.catalogue.with(|items| {
            group_permissions(items)
                .into_iter()
                .map(|(subject, perms)| {
                    let names: Vec<String> = perms.iter().map(|p| p.name.clone()).collect();
                    (subject, names)
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <ErrorBanner message=vm.error />
            <div class="details-form">
                <div class="form-group">
                    <label for="role-name">"Nama role"</label>
                    <input
                        type="text"
                        id="role-name"
                        prop:value=move || vm.form.with(|f| f.name.clone())
                        on:input=move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldError errors=vm.field_errors field="name" />
                </div>

                <div class="permission-grid">
                    {move || groups().into_iter().map(|(subject, names)| {
                        let all = names.clone();
                        let all_for_check = names.clone();
                        view! {
                            <fieldset class="permission-grid__group">
                                <legend>
                                    <label class="checkbox">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || all_for_check.iter().all(|n| vm.is_granted(n))
                                            on:change=move |ev| vm.set_group(&all, event_target_checked(&ev))
                                        />
                                        <span>{subject}</span>
                                    </label>
                                </legend>
                                {names.into_iter().map(|name| {
                                    let checked_name = name.clone();
                                    let toggled_name = name.clone();
                                    view! {
                                        <label class="checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || vm.is_granted(&checked_name)
                                                on:change=move |ev| vm.set_granted(&toggled_name, event_target_checked(&ev))
                                            />
                                            <span>{name}</span>
                                        </label>
                                    }
                                }).collect_view()}
                            </fieldset>
                        }
                    }).collect_view()}
                </div>
                <FieldError errors=vm.field_errors field="permissions" />
            </div>
        </Modal>
    }
}
