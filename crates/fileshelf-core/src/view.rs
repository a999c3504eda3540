//! The file-listing view: single owner of all engine state.
//!
//! Holds the fetched snapshot, the active filter/query/page, the loading
//! flag, and the placeholder animation handle. Every state change triggers a
//! full recompute of the filtered set from the raw store; pagination is
//! re-clamped as part of the same step.

use chrono::{NaiveDate, Utc};

use crate::cycler::CyclerHandle;
use crate::error::{ErrorPayload, ShelfError};
use crate::highlight::highlight;
use crate::models::{FetchOutcome, FileRecord, PageView, RecordRow};
use crate::paginate::Paginator;
use crate::pipeline::filter_records;
use crate::session::SharedSession;
use crate::window::{DateWindow, NamedFilter};

pub struct FileListView {
    session: SharedSession,
    store: Vec<FileRecord>,
    loading: bool,
    filter: NamedFilter,
    window: Option<DateWindow>,
    query: String,
    filtered: Vec<FileRecord>,
    pager: Paginator,
    cycler: Option<CyclerHandle>,
    last_error: Option<ErrorPayload>,
    skipped_records: usize,
}

impl std::fmt::Debug for FileListView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileListView")
            .field("records", &self.store.len())
            .field("filter", &self.filter)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl FileListView {
    /// Creates the view in its loading state and starts the placeholder
    /// animation. The store stays empty until `apply_fetch`.
    #[must_use]
    pub fn mount(session: SharedSession) -> Self {
        Self {
            session,
            store: Vec::new(),
            loading: true,
            filter: NamedFilter::All,
            window: None,
            query: String::new(),
            filtered: Vec::new(),
            pager: Paginator::new(),
            cycler: Some(CyclerHandle::spawn()),
            last_error: None,
            skipped_records: 0,
        }
    }

    /// Stops the animation thread. Safe to call more than once; also runs
    /// implicitly when the view is dropped.
    pub fn unmount(&mut self) {
        if let Some(cycler) = self.cycler.take() {
            cycler.stop();
        }
    }

    /// Replaces the store wholesale with a fetch snapshot and clears the
    /// loading flag.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        self.store = outcome.records;
        self.skipped_records = outcome.skipped_records;
        self.loading = false;
        self.last_error = None;
        self.recompute();
    }

    /// Records a failed fetch: loading ends, the store stays empty, and the
    /// error is kept as a payload for the rendering layer. No retry.
    pub fn fetch_failed(&mut self, err: &ShelfError) {
        self.loading = false;
        self.last_error = Some(err.to_payload("fetch_all_files"));
        self.recompute();
    }

    pub fn set_filter(&mut self, filter: NamedFilter) {
        self.set_filter_as_of(filter, Utc::now().date_naive());
    }

    /// Filter change with an explicit "today", for deterministic callers.
    pub fn set_filter_as_of(&mut self, filter: NamedFilter, today: NaiveDate) {
        self.filter = filter;
        self.window = filter.resolve(today);
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.recompute();
    }

    /// Explicit page navigation; out-of-range requests are rejected.
    pub fn request_page(&mut self, page: usize) -> bool {
        self.pager.request_page(page, self.filtered.len())
    }

    /// Always from the raw store: date window first, then text, then the
    /// page clamp. Never applied to a previously filtered result.
    fn recompute(&mut self) {
        self.filtered = filter_records(&self.store, self.window.as_ref(), &self.query);
        self.pager.clamp(self.filtered.len());
    }

    /// The current page rendered for the table layer.
    #[must_use]
    pub fn page(&self) -> PageView {
        let total_pages = Paginator::total_pages(self.filtered.len());
        let current_page = self.pager.effective_page(self.filtered.len());
        let offset = (current_page - 1) * crate::paginate::PAGE_SIZE;

        let rows = self
            .pager
            .slice(&self.filtered)
            .iter()
            .enumerate()
            .map(|(index, record)| RecordRow {
                id: record.id,
                serial: offset + index + 1,
                title: highlight(&record.title, &self.query),
                owner: highlight(&record.owner.full_name(), &self.query),
                created: display_date(record),
                file_path: record.file_path.clone(),
            })
            .collect();

        PageView {
            rows,
            current_page,
            total_pages,
            filtered_count: self.filtered.len(),
            has_prev: current_page > 1,
            has_next: current_page < total_pages,
            loading: self.loading,
        }
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        self.cycler
            .as_ref()
            .map(CyclerHandle::placeholder)
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn filter(&self) -> NamedFilter {
        self.filter
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn window(&self) -> Option<&DateWindow> {
        self.window.as_ref()
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&ErrorPayload> {
        self.last_error.as_ref()
    }

    #[must_use]
    pub const fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    #[must_use]
    pub fn current_user_id(&self) -> Option<String> {
        self.session.current_user_id()
    }
}

impl Drop for FileListView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn display_date(record: &FileRecord) -> String {
    record
        .created_day()
        .map_or_else(|| "N/A".to_string(), |day| day.format("%d/%m/%Y").to_string())
}
