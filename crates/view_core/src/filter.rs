//! Filter resolution and option lists.

use std::{collections::HashSet, sync::Arc};

use shared::domain::{FilterAttribute, Record, ALL};

use crate::state::FilterSelection;

pub fn matches(record: &Record, selection: &FilterSelection) -> bool {
    FilterAttribute::ALL_ATTRIBUTES.iter().all(|&attribute| {
        selection
            .constraint(attribute)
            .map_or(true, |value| attribute.value_of(record) == value)
    })
}

/// Records satisfying every constrained attribute, in input order.
pub fn resolve(records: &[Arc<Record>], selection: &FilterSelection) -> Vec<Arc<Record>> {
    records
        .iter()
        .filter(|record| matches(record, selection))
        .cloned()
        .collect()
}

/// `"All"` followed by the distinct values of `attribute`, in order of first
/// appearance.
pub fn options(records: &[Arc<Record>], attribute: FilterAttribute) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL.to_string()];
    for record in records {
        let value = attribute.value_of(record);
        if value != ALL && seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
