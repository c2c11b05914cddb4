use super::*;

#[test]
fn toggling_a_row_twice_restores_the_set() {
    let mut state = DisclosureState::default();
    state.toggle_row(RecordId(2));
    let before = state.clone();

    assert!(state.toggle_row(RecordId(5)));
    assert!(state.is_row_expanded(RecordId(5)));
    assert!(!state.toggle_row(RecordId(5)));

    assert_eq!(state, before);
}

#[test]
fn rows_toggle_independently() {
    let mut state = DisclosureState::default();
    state.toggle_row(RecordId(3));
    state.toggle_row(RecordId(5));
    state.toggle_row(RecordId(5));

    assert!(state.is_row_expanded(RecordId(3)));
    assert!(!state.is_row_expanded(RecordId(5)));
    assert_eq!(state.expanded_rows().collect::<Vec<_>>(), vec![RecordId(3)]);
}

#[test]
fn unknown_column_groups_start_collapsed() {
    let mut state = DisclosureState::default();
    assert!(!state.is_column_group_expanded("trim"));
    assert!(state.toggle_column_group("trim"));
    assert!(!state.toggle_column_group("trim"));
    assert!(!state.is_column_group_expanded("trim"));
}

#[test]
fn location_group_inserts_country_and_city() {
    let mut state = DisclosureState::default();
    let collapsed = visible_columns(&state);
    assert_eq!(collapsed.len(), 7);
    assert!(!collapsed.contains(&Column::City));

    state.toggle_column_group(LOCATION_GROUP);
    let expanded = visible_columns(&state);
    assert_eq!(
        expanded,
        vec![
            Column::Category,
            Column::Make,
            Column::Model,
            Column::Year,
            Column::Location,
            Column::Country,
            Column::City,
            Column::PriceRange,
            Column::FuelType,
        ]
    );
}

#[test]
fn row_expansion_does_not_change_the_column_layout() {
    let mut state = DisclosureState::default();
    let before = visible_columns(&state);
    state.toggle_row(RecordId(1));
    assert_eq!(visible_columns(&state), before);
}

#[test]
fn retain_rows_drops_missing_ids() {
    let mut state = DisclosureState::default();
    for id in [1, 2, 3] {
        state.toggle_row(RecordId(id));
    }
    state.retain_rows(|id| id != RecordId(2));
    assert_eq!(
        state.expanded_rows().collect::<Vec<_>>(),
        vec![RecordId(1), RecordId(3)]
    );
}

#[test]
fn only_make_model_and_year_headers_sort() {
    assert_eq!(Column::Make.sort_key(), Some(SortKey::Make));
    assert_eq!(Column::Year.sort_key(), Some(SortKey::Year));
    assert_eq!(Column::Category.sort_key(), None);
    assert_eq!(Column::Location.sort_key(), None);
}
