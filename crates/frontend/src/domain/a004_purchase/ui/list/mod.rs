use crate::domain::a004_purchase::api;
use crate::domain::a004_purchase::ui::import::PurchaseImport;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, TableCellMoney};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::guard::Can;
use contracts::domain::a004_purchase::Purchase;
use leptos::prelude::*;

/// Purchase (stock receipt) history. Purchases are created by the import only.
#[component]
pub fn PurchaseList() -> impl IntoView {
    let list = ListState::<Purchase>::new(api::fetch_page);
    let importing = RwSignal::new(false);

    let on_imported = Callback::new(move |_| list.reload());
    let on_close = Callback::new(move |_| importing.set(false));

    view! {
        <div class="page">
            <PageHeader title="Pembelian" subtitle="Riwayat penerimaan barang".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari faktur atau supplier..."
                />
                <Can permission="import-purchase">
                    <button class="button button--primary" on:click=move |_| importing.set(true)>
                        {icon("upload")}
                        "Impor Pembelian"
                    </button>
                </Can>
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
                            <th class="table__header-cell">"Supplier"</th>
                            <th class="table__header-cell">"Tanggal"</th>
                            <th class="table__header-cell table__header-cell--number">"Item"</th>
                            <th class="table__header-cell table__header-cell--number">"Total"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            list.visible().into_iter().map(|row| {
                                let total = row.total;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&row.invoice_number, &filter)}</td>
                                        <td class="table__cell">{highlight_matches(row.supplier_name(), &filter)}</td>
                                        <td class="table__cell">{format_date(&row.purchase_date)}</td>
                                        <td class="table__cell table__cell--number">{row.items_count}</td>
                                        <TableCellMoney value=Signal::derive(move || Some(total)) />
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.loading.get() && list.visible().is_empty()>
                    <div class="table__empty">"Belum ada pembelian"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            <Show when=move || importing.get()>
                <PurchaseImport on_imported=on_imported on_close=on_close />
            </Show>
        </div>
    }
}
