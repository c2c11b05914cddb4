use super::*;
use shared::domain::{RecordDetails, RecordId, SortKey};
use view_core::EngineSettings;

fn record(id: i64, make: &str, details: bool) -> Record {
    Record {
        id: RecordId(id),
        category: "SUV".into(),
        make: make.into(),
        model: format!("Model {id}"),
        year: 2010 + id as i32,
        transmission: "Automatic".into(),
        country_of_origin: "Japan".into(),
        city: Some("Nagoya".into()),
        price_range: "$25,000 - $35,000".into(),
        fuel_type: "Hybrid".into(),
        details: details.then(|| RecordDetails {
            engine: "2.5L I4".into(),
            horsepower: "219 hp".into(),
            torque: "163 lb-ft".into(),
        }),
    }
}

fn rendered(engine: &ViewEngine) -> String {
    let mut out = Vec::new();
    render_view(engine, &mut out).expect("render");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn table_lists_headers_rows_and_page_footer() {
    let engine = ViewEngine::with_records(
        EngineSettings::default(),
        vec![record(1, "Toyota", true), record(2, "Honda", false)],
    );
    let text = rendered(&engine);

    assert!(text.contains("Make: [All, Toyota, Honda]"));
    assert!(text.contains("Category | Make *"));
    assert!(text.contains("SUV [+]"));
    assert!(text.contains("Click to expand"));
    assert!(!text.contains("Nagoya"));
    assert!(text.contains(ZEBRA_MARK));
    assert!(text.ends_with("Page 1 of 1 (2 records)\n"));
}

#[test]
fn disclosure_adds_columns_and_detail_lines() {
    let mut engine = ViewEngine::with_records(
        EngineSettings::default(),
        vec![record(1, "Toyota", true), record(2, "Honda", false)],
    );
    engine.toggle_column_group(LOCATION_GROUP);
    engine.toggle_row(RecordId(1));
    let text = rendered(&engine);

    assert!(text.contains("Country"));
    assert!(text.contains("Nagoya"));
    assert!(text.contains("Click to close"));
    assert!(text.contains("SUV [-]"));
    assert!(text.contains("Engine: 2.5L I4 | Horsepower: 219 hp | Torque: 163 lb-ft"));
}

#[test]
fn active_sort_and_selection_are_marked() {
    let mut engine = ViewEngine::with_records(
        EngineSettings::default(),
        vec![record(1, "Toyota", false), record(2, "Honda", false)],
    );
    engine.sort(SortKey::Year);
    engine.sort(SortKey::Year);
    engine.set_filter(FilterAttribute::Make, "Honda");
    engine.toggle_style();
    let text = rendered(&engine);

    assert!(text.contains("Year v"));
    assert!(text.contains("Selected: Honda"));
    assert!(!text.contains(ZEBRA_MARK));
}

#[test]
fn loading_and_empty_states_are_explicit() {
    let engine = ViewEngine::default();
    let text = rendered(&engine);

    assert!(text.starts_with("Loading catalog..."));
    assert!(text.contains("(no records)"));
    assert!(text.contains("Page 1 of 1 (0 records)"));
}

#[test]
fn json_output_is_the_snapshot() {
    let engine = ViewEngine::with_records(EngineSettings::default(), vec![record(3, "Ford", false)]);
    let mut out = Vec::new();
    render_json(&engine, &mut out).expect("json");

    let value: serde_json::Value = serde_json::from_slice(&out).expect("parse");
    assert_eq!(value["visible"][0]["id"], 3);
    assert_eq!(value["status"]["state"], "loaded");
}
