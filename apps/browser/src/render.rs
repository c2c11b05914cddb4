//! Plain-text rendering of the current view.

use std::io::{self, Write};

use shared::domain::{FilterAttribute, Record, ALL, LOCATION_GROUP};
use view_core::{Column, LoadStatus, SortDirection, TableStyle, ViewEngine};

const ZEBRA_MARK: &str = "░ ";
const NO_MARK: &str = "  ";

pub fn cell_text(column: Column, record: &Record, location_open: bool, expanded: bool) -> String {
    match column {
        Column::Category => match (&record.details, expanded) {
            (Some(_), true) => format!("{} [-]", record.category),
            (Some(_), false) => format!("{} [+]", record.category),
            (None, _) => record.category.clone(),
        },
        Column::Make => record.make.clone(),
        Column::Model => record.model.clone(),
        Column::Year => record.year.to_string(),
        Column::Location if location_open => "Click to close".into(),
        Column::Location => "Click to expand".into(),
        Column::Country => record.country_of_origin.clone(),
        Column::City => record.city.clone().unwrap_or_default(),
        Column::PriceRange => record.price_range.clone(),
        Column::FuelType => record.fuel_type.clone(),
    }
}

fn header_text(engine: &ViewEngine, column: Column) -> String {
    let active = engine
        .sort_directive()
        .filter(|directive| Some(directive.key) == column.sort_key());
    match (column.sort_key(), active) {
        (_, Some(directive)) => match directive.direction {
            SortDirection::Ascending => format!("{} ^", column.header()),
            SortDirection::Descending => format!("{} v", column.header()),
        },
        (Some(_), None) => format!("{} *", column.header()),
        (None, None) => column.header().to_string(),
    }
}

pub fn render_view(engine: &ViewEngine, out: &mut impl Write) -> io::Result<()> {
    match engine.status() {
        LoadStatus::Loading => writeln!(out, "Loading catalog...")?,
        LoadStatus::Failed(failure) => writeln!(out, "Catalog failed to load: {failure}")?,
        LoadStatus::Loaded => {}
    }

    for attribute in FilterAttribute::ALL_ATTRIBUTES {
        let selected = engine.filter_selection().get(attribute);
        let options = engine.filter_options(attribute).join(", ");
        write!(out, "{}: [{options}]", attribute.label())?;
        if selected != ALL {
            write!(out, "  Selected: {selected}")?;
        }
        writeln!(out)?;
    }

    let columns = engine.columns();
    let location_open = engine.disclosure().is_column_group_expanded(LOCATION_GROUP);
    let headers: Vec<String> = columns
        .iter()
        .map(|&column| header_text(engine, column))
        .collect();
    let rows: Vec<(&Record, Vec<String>)> = engine
        .visible_page()
        .iter()
        .map(|record| {
            let expanded = engine.is_row_expanded(record.id);
            let cells = columns
                .iter()
                .map(|&column| cell_text(column, record, location_open, expanded))
                .collect();
            (record.as_ref(), cells)
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for (_, cells) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out)?;
    writeln!(out, "{NO_MARK}{}", join_padded(&headers, &widths))?;
    let rule: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
    writeln!(out, "{NO_MARK}{}", "-".repeat(rule))?;

    for (index, (record, cells)) in rows.iter().enumerate() {
        let mark = match engine.style() {
            TableStyle::Zebra if index % 2 == 1 => ZEBRA_MARK,
            _ => NO_MARK,
        };
        writeln!(out, "{mark}{}", join_padded(cells, &widths))?;

        if let Some(details) = record
            .details
            .as_ref()
            .filter(|_| engine.is_row_expanded(record.id))
        {
            writeln!(
                out,
                "{mark}    Engine: {} | Horsepower: {} | Torque: {}",
                details.engine, details.horsepower, details.torque
            )?;
        }
    }

    if rows.is_empty() {
        writeln!(out, "{NO_MARK}(no records)")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Page {} of {} ({} records)",
        engine.page_state().current,
        engine.total_pages(),
        engine.working_set().len()
    )
}

pub fn render_json(engine: &ViewEngine, out: &mut impl Write) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &engine.snapshot())?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
