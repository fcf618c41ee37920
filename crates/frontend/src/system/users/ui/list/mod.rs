use crate::shared::components::{DeleteConfirm, DeleteTarget, ErrorBanner, PageHeader, PaginationControls};
use crate::shared::date_utils::format_datetime_str;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::context::use_actor;
use crate::system::users::api;
use crate::system::users::ui::details::UserDetails;
use contracts::system::users::{User, UserForm};
use leptos::prelude::*;

#[component]
pub fn UsersListPage() -> impl IntoView {
    let list = ListState::<User>::new(api::fetch_page);
    let editing = RwSignal::new(None::<UserForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    let actor = use_actor();

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        list.reload();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));
    let on_deleted = Callback::new(move |_| list.reload());

    view! {
        <div class="page">
            <PageHeader title="Pengguna" subtitle="Akun dan role pengguna aplikasi".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari nama atau email..."
                />
                <button class="button button--primary" on:click=move |_| editing.set(Some(UserForm::default()))>
                    {icon("plus")}
                    "Tambah Pengguna"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Muat ulang"
                </button>
            </PageHeader>

            <ErrorBanner message=list.error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Email"</th>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell">"Dibuat"</th>
                            <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            let own_id = actor.with(|a| a.as_ref().map(|a| a.id));
                            list.visible().into_iter().map(|row| {
                                let form = UserForm::from_user(&row);
                                let target = DeleteTarget::new(row.id, row.name.clone());
                                let is_self = own_id == Some(row.id);
                                let created = row.created_at.as_deref().map(format_datetime_str).unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&row.name, &filter)}</td>
                                        <td class="table__cell">{highlight_matches(&row.email, &filter)}</td>
                                        <td class="table__cell">{row.role_names()}</td>
                                        <td class="table__cell">{created}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| editing.set(Some(form.clone()))>
                                                {icon("edit")}
                                            </button>
                                            // the signed-in account cannot delete itself
                                            {(!is_self).then(|| view! {
                                                <button class="button button--icon button--danger" title="Hapus"
                                                    on:click=move |_| deleting.set(Some(target.clone()))>
                                                    {icon("delete")}
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.loading.get() && list.visible().is_empty()>
                    <div class="table__empty">"Tidak ada pengguna"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            {move || editing.get().map(|initial| view! {
                <UserDetails initial=initial on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm target=deleting entity="pengguna" resource=api::RESOURCE on_done=on_deleted />
        </div>
    }
}
