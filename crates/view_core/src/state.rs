//! Serializable view-state bundle shared by the resolvers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::{
    domain::{FilterAttribute, SortKey, ALL},
    error::ParseNameError,
};

use crate::{disclosure::DisclosureState, paginate::PageState};

/// Current value per filterable attribute; `"All"` means unconstrained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub make: String,
    pub transmission: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            make: ALL.to_string(),
            transmission: ALL.to_string(),
        }
    }
}

impl FilterSelection {
    pub fn get(&self, attribute: FilterAttribute) -> &str {
        match attribute {
            FilterAttribute::Make => &self.make,
            FilterAttribute::Transmission => &self.transmission,
        }
    }

    pub fn set(&mut self, attribute: FilterAttribute, value: impl Into<String>) {
        let value = value.into();
        match attribute {
            FilterAttribute::Make => self.make = value,
            FilterAttribute::Transmission => self.transmission = value,
        }
    }

    /// The concrete value for `attribute`, or `None` when it is `"All"`.
    pub fn constraint(&self, attribute: FilterAttribute) -> Option<&str> {
        let value = self.get(attribute);
        (value != ALL).then_some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Directive produced by selecting `key` while `previous` is active: the
    /// same key flips ascending to descending, anything else starts ascending.
    pub fn toggled(previous: Option<&SortDirective>, key: SortKey) -> Self {
        match previous {
            Some(current)
                if current.key == key && current.direction == SortDirection::Ascending =>
            {
                Self {
                    key,
                    direction: SortDirection::Descending,
                }
            }
            _ => Self::ascending(key),
        }
    }
}

/// Where filter option lists are collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSource {
    /// Every record of the loaded collection; lists stay stable while filtering.
    #[default]
    Catalog,
    /// Only the current working subset; lists shrink with the other filter.
    WorkingSet,
}

impl FromStr for OptionSource {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "catalog" => Ok(OptionSource::Catalog),
            "working_set" | "working" => Ok(OptionSource::WorkingSet),
            other => Err(ParseNameError::UnknownOptionSource(other.to_string())),
        }
    }
}

/// Cosmetic table style. Has no effect on filtering, sorting or paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    #[default]
    Zebra,
    Plain,
}

impl TableStyle {
    pub fn toggled(self) -> Self {
        match self {
            TableStyle::Zebra => TableStyle::Plain,
            TableStyle::Plain => TableStyle::Zebra,
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableStyle::Zebra => "zebra",
            TableStyle::Plain => "plain",
        })
    }
}

impl FromStr for TableStyle {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zebra" => Ok(TableStyle::Zebra),
            "plain" => Ok(TableStyle::Plain),
            other => Err(ParseNameError::UnknownStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub filters: FilterSelection,
    pub sort: Option<SortDirective>,
    pub page: PageState,
    pub disclosure: DisclosureState,
    pub style: TableStyle,
}

impl ViewState {
    pub fn new(page_size: usize, style: TableStyle) -> Self {
        Self {
            filters: FilterSelection::default(),
            sort: None,
            page: PageState::new(page_size),
            disclosure: DisclosureState::default(),
            style,
        }
    }
}
