use std::sync::Arc;

use shared::domain::{Record, RecordDetails, RecordId};

pub(crate) fn record(id: i64, make: &str, transmission: &str, year: i32) -> Record {
    Record {
        id: RecordId(id),
        category: "Sedan".into(),
        make: make.into(),
        model: format!("Model {id}"),
        year,
        transmission: transmission.into(),
        country_of_origin: "Japan".into(),
        city: None,
        price_range: "$20,000 - $30,000".into(),
        fuel_type: "Gasoline".into(),
        details: None,
    }
}

pub(crate) fn with_details(mut record: Record) -> Record {
    record.details = Some(RecordDetails {
        engine: "2.0L I4".into(),
        horsepower: "180 hp".into(),
        torque: "180 lb-ft".into(),
    });
    record
}

pub(crate) fn arced(records: Vec<Record>) -> Vec<Arc<Record>> {
    records.into_iter().map(Arc::new).collect()
}

pub(crate) fn ids(records: &[Arc<Record>]) -> Vec<i64> {
    records.iter().map(|r| r.id.0).collect()
}

/// `count` records cycling through three makes and two transmissions.
pub(crate) fn numbered(count: i64) -> Vec<Record> {
    let makes = ["Toyota", "Honda", "Ford"];
    let transmissions = ["Automatic", "Manual"];
    (1..=count)
        .map(|id| {
            record(
                id,
                makes[(id as usize - 1) % makes.len()],
                transmissions[(id as usize - 1) % transmissions.len()],
                2000 + (id as i32 % 20),
            )
        })
        .collect()
}
