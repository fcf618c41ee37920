//! State of a server-paginated list page.
//!
//! The server owns paging and the debounced `search` parameter; the local
//! filter narrows the page already on screen and never triggers a request.

use contracts::shared::api_error::ApiError;
use contracts::shared::filter::{filter_list, Searchable};
use contracts::shared::pagination::{ListQuery, PageMeta, Paginated};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct ListState<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub meta: RwSignal<PageMeta>,
    pub query: RwSignal<ListQuery>,
    /// Local filter text, applied to `rows` on every keystroke.
    pub filter: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reload_tick: RwSignal<u32>,
    request_seq: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    /// Creates the state and fetches the first page. Any change of `query`
    /// (page, page size, search) or a [`reload`](Self::reload) fetches again.
    pub fn new<F, Fut>(fetch: F) -> Self
    where
        F: Fn(ListQuery) -> Fut + 'static,
        Fut: Future<Output = Result<Paginated<T>, ApiError>> + 'static,
    {
        let this = Self {
            rows: RwSignal::new(Vec::new()),
            meta: RwSignal::new(PageMeta::default()),
            query: RwSignal::new(ListQuery::default()),
            filter: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            reload_tick: RwSignal::new(0),
            request_seq: StoredValue::new(0),
        };

        Effect::new(move |_| {
            this.reload_tick.track();
            let query = this.query.get();

            this.request_seq.update_value(|seq| *seq += 1);
            let seq = this.request_seq.get_value();
            this.loading.set(true);

            let request = fetch(query);
            spawn_local(async move {
                let result = request.await;
                // A newer request was issued meanwhile; its answer wins
                if this.request_seq.get_value() != seq {
                    return;
                }
                match result {
                    Ok(page) => {
                        this.rows.set(page.data);
                        this.meta.set(page.meta);
                        this.error.set(None);
                    }
                    Err(e) => {
                        log::warn!("list request failed: {}", e);
                        this.error.set(Some(e.to_string()));
                    }
                }
                this.loading.set(false);
            });
        });

        this
    }

    pub fn reload(&self) {
        self.reload_tick.update(|n| *n = n.wrapping_add(1));
    }

    /// Rows of the current page that match the local filter.
    pub fn visible(&self) -> Vec<T> {
        let filter = self.filter.get();
        self.rows.with(|rows| filter_list(rows, &filter))
    }

    pub fn set_page(&self, page: u32) {
        self.query.update(|q| *q = q.with_page(page));
    }

    pub fn set_per_page(&self, per_page: u32) {
        self.query.update(|q| *q = q.with_per_page(per_page));
    }

    pub fn set_search(&self, search: String) {
        if self.query.with_untracked(|q| q.search.as_deref().unwrap_or_default() == search.trim()) {
            return;
        }
        self.query.update(|q| *q = q.with_search(&search));
    }
}
