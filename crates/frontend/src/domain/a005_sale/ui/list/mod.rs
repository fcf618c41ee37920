use crate::domain::a005_sale::api;
use crate::domain::a005_sale::ui::details::SaleDetails;
use crate::shared::components::{
    DeleteConfirm, DeleteTarget, ErrorBanner, PageHeader, PaginationControls, TableCellMoney,
};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::guard::Can;
use contracts::domain::a005_sale::Sale;
use leptos::prelude::*;

#[component]
pub fn SaleList() -> impl IntoView {
    let list = ListState::<Sale>::new(api::fetch_page);
    let viewing = RwSignal::new(None::<Sale>);
    let deleting = RwSignal::new(None::<DeleteTarget>);

    let on_close = Callback::new(move |_| viewing.set(None));
    let on_deleted = Callback::new(move |_| list.reload());

    view! {
        <div class="page">
            <PageHeader title="Riwayat Penjualan" subtitle="Transaksi kasir".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari faktur atau kasir..."
                />
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
                            <th class="table__header-cell">"No. Faktur"</th>
                            <th class="table__header-cell">"Waktu"</th>
                            <th class="table__header-cell">"Kasir"</th>
                            <th class="table__header-cell table__header-cell--number">"Total"</th>
                            <th class="table__header-cell table__header-cell--number">"Dibayar"</th>
                            <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            list.visible().into_iter().map(|row| {
                                let (total, paid) = (row.total, row.paid);
                                let target = DeleteTarget::new(row.id, row.invoice_number.clone());
                                let created = format_datetime(&row.created_at);
                                let invoice = highlight_matches(&row.invoice_number, &filter);
                                let cashier = highlight_matches(row.cashier_name(), &filter);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{invoice}</td>
                                        <td class="table__cell">{created}</td>
                                        <td class="table__cell">{cashier}</td>
                                        <TableCellMoney value=Signal::derive(move || Some(total)) bold=true />
                                        <TableCellMoney value=Signal::derive(move || Some(paid)) />
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Detail"
                                                on:click=move |_| viewing.set(Some(row.clone()))>
                                                {icon("eye")}
                                            </button>
                                            <Can permission="delete-sale">
                                                <button class="button button--icon button--danger" title="Hapus"
                                                    on:click={
                                                        let target = target.clone();
                                                        move |_| deleting.set(Some(target.clone()))
                                                    }>
                                                    {icon("delete")}
                                                </button>
                                            </Can>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.loading.get() && list.visible().is_empty()>
                    <div class="table__empty">"Belum ada penjualan"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            {move || viewing.get().map(|sale| view! { <SaleDetails sale=sale on_close=on_close /> })}

            <DeleteConfirm target=deleting entity="penjualan" resource=api::RESOURCE on_done=on_deleted />
        </div>
    }
}
