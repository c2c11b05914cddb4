use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(RecordId);

/// Filter value meaning "no constraint" for an attribute.
pub const ALL: &str = "All";

/// Name of the column group that reveals the country and city columns.
pub const LOCATION_GROUP: &str = "location";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDetails {
    pub engine: String,
    pub horsepower: String,
    pub torque: String,
}

/// One vehicle in the catalog. Never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub category: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub transmission: String,
    pub country_of_origin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    pub price_range: String,
    pub fuel_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<RecordDetails>,
}

impl Record {
    pub fn has_details(&self) -> bool {
        self.details.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterAttribute {
    Make,
    Transmission,
}

impl FilterAttribute {
    pub const ALL_ATTRIBUTES: [FilterAttribute; 2] =
        [FilterAttribute::Make, FilterAttribute::Transmission];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterAttribute::Make => "make",
            FilterAttribute::Transmission => "transmission",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterAttribute::Make => "Make",
            FilterAttribute::Transmission => "Transmission",
        }
    }

    pub fn value_of(self, record: &Record) -> &str {
        match self {
            FilterAttribute::Make => &record.make,
            FilterAttribute::Transmission => &record.transmission,
        }
    }
}

impl fmt::Display for FilterAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterAttribute {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "make" => Ok(FilterAttribute::Make),
            "transmission" => Ok(FilterAttribute::Transmission),
            other => Err(ParseNameError::UnknownAttribute(other.to_string())),
        }
    }
}

/// Record fields a view can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Category,
    Make,
    Model,
    Year,
    Transmission,
    CountryOfOrigin,
    City,
    PriceRange,
    FuelType,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Category => "category",
            SortKey::Make => "make",
            SortKey::Model => "model",
            SortKey::Year => "year",
            SortKey::Transmission => "transmission",
            SortKey::CountryOfOrigin => "country_of_origin",
            SortKey::City => "city",
            SortKey::PriceRange => "price_range",
            SortKey::FuelType => "fuel_type",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, SortKey::Year)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "id" => SortKey::Id,
            "category" => SortKey::Category,
            "make" => SortKey::Make,
            "model" => SortKey::Model,
            "year" => SortKey::Year,
            "transmission" => SortKey::Transmission,
            "country" | "country_of_origin" => SortKey::CountryOfOrigin,
            "city" => SortKey::City,
            "price" | "price_range" => SortKey::PriceRange,
            "fuel" | "fuel_type" => SortKey::FuelType,
            other => return Err(ParseNameError::UnknownSortKey(other.to_string())),
        };
        Ok(key)
    }
}
