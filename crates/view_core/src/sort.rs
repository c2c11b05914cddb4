//! Single-key ordering of the working subset.
//!
//! Year is compared numerically and its direction labels are inverted:
//! "ascending" lists the most recent year first. Every other key compares the
//! field's text, with absent values treated as the empty string.

use std::{borrow::Cow, cmp::Ordering, sync::Arc};

use shared::domain::{Record, SortKey};

use crate::state::{SortDirection, SortDirective};

pub fn sort_text(record: &Record, key: SortKey) -> Cow<'_, str> {
    match key {
        SortKey::Id => Cow::Owned(record.id.to_string()),
        SortKey::Category => Cow::Borrowed(record.category.as_str()),
        SortKey::Make => Cow::Borrowed(record.make.as_str()),
        SortKey::Model => Cow::Borrowed(record.model.as_str()),
        SortKey::Year => Cow::Owned(record.year.to_string()),
        SortKey::Transmission => Cow::Borrowed(record.transmission.as_str()),
        SortKey::CountryOfOrigin => Cow::Borrowed(record.country_of_origin.as_str()),
        SortKey::City => Cow::Borrowed(record.city.as_deref().unwrap_or_default()),
        SortKey::PriceRange => Cow::Borrowed(record.price_range.as_str()),
        SortKey::FuelType => Cow::Borrowed(record.fuel_type.as_str()),
    }
}

pub fn compare(a: &Record, b: &Record, directive: &SortDirective) -> Ordering {
    if directive.key.is_numeric() {
        return match directive.direction {
            SortDirection::Ascending => b.year.cmp(&a.year),
            SortDirection::Descending => a.year.cmp(&b.year),
        };
    }

    let ordering = sort_text(a, directive.key).cmp(&sort_text(b, directive.key));
    match directive.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable sort into a new sequence; ties keep their input order in both
/// directions.
pub fn resolve(records: &[Arc<Record>], directive: &SortDirective) -> Vec<Arc<Record>> {
    let mut ordered = records.to_vec();
    ordered.sort_by(|a, b| compare(a, b, directive));
    ordered
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
