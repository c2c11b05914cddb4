use serde::{Deserialize, Serialize};

use crate::domain::{FilterAttribute, RecordId, SortKey};

/// User actions accepted by the view engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum ViewAction {
    SetFilter {
        attribute: FilterAttribute,
        value: String,
    },
    Sort {
        key: SortKey,
    },
    NextPage,
    PreviousPage,
    ToggleRow {
        id: RecordId,
    },
    ToggleColumnGroup {
        name: String,
    },
    ToggleStyle,
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::SetFilter { .. } => "set_filter",
            ViewAction::Sort { .. } => "sort",
            ViewAction::NextPage => "next_page",
            ViewAction::PreviousPage => "previous_page",
            ViewAction::ToggleRow { .. } => "toggle_row",
            ViewAction::ToggleColumnGroup { .. } => "toggle_column_group",
            ViewAction::ToggleStyle => "toggle_style",
        }
    }
}
