//! View-state engine for browsing a vehicle catalog.
//!
//! Every action that changes the working subset runs the same pipeline before
//! returning: filter, sort, reset to page 1, then paginate on read. Disclosure
//! and style toggles never touch that pipeline.

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use catalog_source::RecordSource;
use serde::Serialize;
use shared::{
    domain::{FilterAttribute, Record, RecordId, SortKey},
    error::LoadFailure,
    protocol::ViewAction,
};
use tracing::{debug, info, warn};

pub mod disclosure;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use disclosure::{visible_columns, Column, DisclosureState};
pub use paginate::{PageState, DEFAULT_PAGE_SIZE};
pub use state::{
    FilterSelection, OptionSource, SortDirection, SortDirective, TableStyle, ViewState,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "failure", rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Loaded,
    Failed(LoadFailure),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub page_size: usize,
    pub option_source: OptionSource,
    pub style: TableStyle,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            option_source: OptionSource::default(),
            style: TableStyle::default(),
        }
    }
}

/// Read-only copy of everything the presentation layer renders.
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub status: LoadStatus,
    pub filters: FilterSelection,
    pub sort: Option<SortDirective>,
    pub page: PageState,
    pub total_pages: usize,
    pub working_count: usize,
    pub visible: Vec<Record>,
    pub options: BTreeMap<FilterAttribute, Vec<String>>,
    pub columns: Vec<Column>,
    pub expanded_rows: Vec<RecordId>,
    pub style: TableStyle,
}

#[derive(Debug)]
pub struct ViewEngine {
    settings: EngineSettings,
    status: LoadStatus,
    catalog: Vec<Arc<Record>>,
    /// Filtered and sorted; the visible page is sliced from here.
    working: Vec<Arc<Record>>,
    state: ViewState,
}

impl Default for ViewEngine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl ViewEngine {
    /// An engine waiting for its records; all views are empty until a load completes.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            status: LoadStatus::Loading,
            catalog: Vec::new(),
            working: Vec::new(),
            state: ViewState::new(settings.page_size, settings.style),
        }
    }

    pub fn with_records(settings: EngineSettings, records: Vec<Record>) -> Self {
        let mut engine = Self::new(settings);
        engine.complete_load(Ok(records));
        engine
    }

    /// Fetches the collection once from `source` and records the outcome.
    pub async fn load(&mut self, source: &dyn RecordSource) -> Result<usize, LoadFailure> {
        self.begin_load();
        debug!(source = %source.describe(), "loading catalog");
        match source.fetch().await {
            Ok(records) => {
                let count = records.len();
                self.complete_load(Ok(records));
                Ok(count)
            }
            Err(err) => {
                let failure = LoadFailure::from(err);
                self.complete_load(Err(failure.clone()));
                Err(failure)
            }
        }
    }

    pub fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    /// Installs a loaded collection (or a failure). Filters and sort are kept
    /// and re-applied, the page goes back to 1, and expanded rows whose id is
    /// no longer present are dropped. A failure empties the collection.
    pub fn complete_load(&mut self, result: Result<Vec<Record>, LoadFailure>) {
        match result {
            Ok(records) => {
                self.catalog = records.into_iter().map(Arc::new).collect();
                self.status = LoadStatus::Loaded;
                info!(records = self.catalog.len(), "catalog loaded");
            }
            Err(failure) => {
                warn!(kind = ?failure.kind, message = %failure.message, "catalog load failed");
                self.catalog.clear();
                self.status = LoadStatus::Failed(failure);
            }
        }

        let present: HashSet<RecordId> = self.catalog.iter().map(|record| record.id).collect();
        self.state
            .disclosure
            .retain_rows(|id| present.contains(&id));
        self.resolve_working_set();
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn filter_selection(&self) -> &FilterSelection {
        &self.state.filters
    }

    pub fn sort_directive(&self) -> Option<&SortDirective> {
        self.state.sort.as_ref()
    }

    pub fn page_state(&self) -> &PageState {
        &self.state.page
    }

    pub fn disclosure(&self) -> &DisclosureState {
        &self.state.disclosure
    }

    pub fn style(&self) -> TableStyle {
        self.state.style
    }

    pub fn catalog(&self) -> &[Arc<Record>] {
        &self.catalog
    }

    /// The filtered and sorted records, before pagination.
    pub fn working_set(&self) -> &[Arc<Record>] {
        &self.working
    }

    pub fn total_pages(&self) -> usize {
        self.state.page.total_pages(self.working.len())
    }

    pub fn visible_page(&self) -> &[Arc<Record>] {
        paginate::page_slice(&self.working, &self.state.page)
    }

    pub fn filter_options(&self, attribute: FilterAttribute) -> Vec<String> {
        let records = match self.settings.option_source {
            OptionSource::Catalog => &self.catalog,
            OptionSource::WorkingSet => &self.working,
        };
        filter::options(records, attribute)
    }

    pub fn columns(&self) -> Vec<Column> {
        visible_columns(&self.state.disclosure)
    }

    pub fn is_row_expanded(&self, id: RecordId) -> bool {
        self.state.disclosure.is_row_expanded(id)
    }

    pub fn set_filter(&mut self, attribute: FilterAttribute, value: impl Into<String>) {
        self.state.filters.set(attribute, value);
        debug!(
            %attribute,
            value = self.state.filters.get(attribute),
            "filter selected"
        );
        self.resolve_working_set();
    }

    pub fn sort(&mut self, key: SortKey) {
        let directive = SortDirective::toggled(self.state.sort.as_ref(), key);
        debug!(%key, direction = ?directive.direction, "sort selected");
        self.state.sort = Some(directive);
        self.resolve_working_set();
    }

    pub fn next_page(&mut self) {
        let total = self.total_pages();
        if self.state.page.next(total) {
            debug!(page = self.state.page.current, total, "next page");
        }
    }

    pub fn previous_page(&mut self) {
        if self.state.page.previous() {
            debug!(page = self.state.page.current, "previous page");
        }
    }

    pub fn toggle_row(&mut self, id: RecordId) {
        let expanded = self.state.disclosure.toggle_row(id);
        debug!(%id, expanded, "row toggled");
    }

    pub fn toggle_column_group(&mut self, name: &str) {
        let expanded = self.state.disclosure.toggle_column_group(name);
        debug!(group = name, expanded, "column group toggled");
    }

    pub fn toggle_style(&mut self) {
        self.state.style = self.state.style.toggled();
        debug!(style = %self.state.style, "style toggled");
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SetFilter { attribute, value } => self.set_filter(attribute, value),
            ViewAction::Sort { key } => self.sort(key),
            ViewAction::NextPage => self.next_page(),
            ViewAction::PreviousPage => self.previous_page(),
            ViewAction::ToggleRow { id } => self.toggle_row(id),
            ViewAction::ToggleColumnGroup { name } => self.toggle_column_group(&name),
            ViewAction::ToggleStyle => self.toggle_style(),
        }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let options = FilterAttribute::ALL_ATTRIBUTES
            .iter()
            .map(|&attribute| (attribute, self.filter_options(attribute)))
            .collect();

        ViewSnapshot {
            status: self.status.clone(),
            filters: self.state.filters.clone(),
            sort: self.state.sort,
            page: self.state.page,
            total_pages: self.total_pages(),
            working_count: self.working.len(),
            visible: self
                .visible_page()
                .iter()
                .map(|record| Record::clone(record))
                .collect(),
            options,
            columns: self.columns(),
            expanded_rows: self.state.disclosure.expanded_rows().collect(),
            style: self.state.style,
        }
    }

    fn resolve_working_set(&mut self) {
        let filtered = filter::resolve(&self.catalog, &self.state.filters);
        self.working = match &self.state.sort {
            Some(directive) => sort::resolve(&filtered, directive),
            None => filtered,
        };
        self.state.page.reset();
        debug!(
            working = self.working.len(),
            total_pages = self.total_pages(),
            "working set resolved"
        );
    }
}

#[cfg(test)]
#[path = "tests/support.rs"]
mod test_support;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
