use super::*;
use crate::test_support::{arced, ids, numbered, record};

fn selection(make: &str, transmission: &str) -> FilterSelection {
    FilterSelection {
        make: make.into(),
        transmission: transmission.into(),
    }
}

#[test]
fn all_sentinels_keep_every_record_in_order() {
    let records = arced(numbered(6));
    let resolved = resolve(&records, &FilterSelection::default());
    assert_eq!(ids(&resolved), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn constraints_combine_conjunctively() {
    let records = arced(numbered(12));

    let toyota = resolve(&records, &selection("Toyota", ALL));
    assert_eq!(ids(&toyota), vec![1, 4, 7, 10]);

    let manual = resolve(&records, &selection(ALL, "Manual"));
    assert_eq!(ids(&manual), vec![2, 4, 6, 8, 10, 12]);

    let both = resolve(&records, &selection("Toyota", "Manual"));
    assert_eq!(ids(&both), vec![4, 10]);
    assert!(both.iter().all(|r| r.make == "Toyota" && r.transmission == "Manual"));
}

#[test]
fn every_selection_matches_its_set_definition() {
    let records = arced(numbered(18));
    let makes = ["All", "Toyota", "Honda", "Ford", "Tesla"];
    let transmissions = ["All", "Automatic", "Manual", "CVT"];

    for make in makes {
        for transmission in transmissions {
            let current = selection(make, transmission);
            let resolved = resolve(&records, &current);
            let expected: Vec<i64> = records
                .iter()
                .filter(|r| {
                    (make == ALL || r.make == make)
                        && (transmission == ALL || r.transmission == transmission)
                })
                .map(|r| r.id.0)
                .collect();
            assert_eq!(ids(&resolved), expected, "{make}/{transmission}");
            assert!(resolved.len() <= records.len());
        }
    }
}

#[test]
fn unknown_value_yields_empty_subset() {
    let records = arced(numbered(5));
    assert!(resolve(&records, &selection("Lada", ALL)).is_empty());
}

#[test]
fn resolving_twice_is_idempotent() {
    let records = arced(numbered(10));
    let current = selection("Honda", ALL);
    let once = resolve(&records, &current);
    let twice = resolve(&once, &current);
    assert_eq!(ids(&once), ids(&twice));
}

#[test]
fn resolved_records_share_the_catalog_allocation() {
    let records = arced(numbered(3));
    let resolved = resolve(&records, &selection("Honda", ALL));
    assert!(Arc::ptr_eq(&resolved[0], &records[1]));
}

#[test]
fn options_start_with_all_and_keep_first_appearance_order() {
    let records = arced(vec![
        record(1, "Ford", "Manual", 2010),
        record(2, "Toyota", "Automatic", 2011),
        record(3, "Ford", "Automatic", 2012),
        record(4, "BMW", "Manual", 2013),
    ]);

    assert_eq!(
        options(&records, FilterAttribute::Make),
        vec!["All", "Ford", "Toyota", "BMW"]
    );
    assert_eq!(
        options(&records, FilterAttribute::Transmission),
        vec!["All", "Manual", "Automatic"]
    );
    assert_eq!(options(&[], FilterAttribute::Make), vec!["All"]);
}
