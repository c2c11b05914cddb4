//! Row and column-group expansion, independent of filter, sort and page.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shared::domain::{RecordId, SortKey, LOCATION_GROUP};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureState {
    expanded_rows: BTreeSet<RecordId>,
    column_groups: BTreeMap<String, bool>,
}

impl DisclosureState {
    /// Flips `id` in the expanded set and returns whether it is now expanded.
    pub fn toggle_row(&mut self, id: RecordId) -> bool {
        if self.expanded_rows.remove(&id) {
            false
        } else {
            self.expanded_rows.insert(id);
            true
        }
    }

    pub fn is_row_expanded(&self, id: RecordId) -> bool {
        self.expanded_rows.contains(&id)
    }

    pub fn expanded_rows(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.expanded_rows.iter().copied()
    }

    /// Flips the named group (collapsed when never seen) and returns the new value.
    pub fn toggle_column_group(&mut self, name: &str) -> bool {
        let expanded = self.column_groups.entry(name.to_string()).or_insert(false);
        *expanded = !*expanded;
        *expanded
    }

    pub fn is_column_group_expanded(&self, name: &str) -> bool {
        self.column_groups.get(name).copied().unwrap_or(false)
    }

    /// Drops expanded rows for which `keep` returns false.
    pub fn retain_rows(&mut self, mut keep: impl FnMut(RecordId) -> bool) {
        self.expanded_rows.retain(|id| keep(*id));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Category,
    Make,
    Model,
    Year,
    Location,
    Country,
    City,
    PriceRange,
    FuelType,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Category => "Category",
            Column::Make => "Make",
            Column::Model => "Model",
            Column::Year => "Year",
            Column::Location => "Location",
            Column::Country => "Country",
            Column::City => "City",
            Column::PriceRange => "Price Range",
            Column::FuelType => "Fuel Type",
        }
    }

    /// Key sorted by clicking this column's header, if it is sortable.
    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Column::Make => Some(SortKey::Make),
            Column::Model => Some(SortKey::Model),
            Column::Year => Some(SortKey::Year),
            _ => None,
        }
    }
}

/// Column layout for the current disclosure state. Row expansion never
/// changes it; the location group inserts country and city after Location.
pub fn visible_columns(state: &DisclosureState) -> Vec<Column> {
    let mut columns = vec![
        Column::Category,
        Column::Make,
        Column::Model,
        Column::Year,
        Column::Location,
    ];
    if state.is_column_group_expanded(LOCATION_GROUP) {
        columns.extend([Column::Country, Column::City]);
    }
    columns.extend([Column::PriceRange, Column::FuelType]);
    columns
}

#[cfg(test)]
#[path = "tests/disclosure_tests.rs"]
mod tests;
