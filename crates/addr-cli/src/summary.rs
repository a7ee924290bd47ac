use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use addr_cli::fill::FillReport;
use addr_core::SubmitOutcome;
use addr_dataset::LookupIndex;
use addr_model::{City, Field, PostalEntry, State};

pub fn print_states(index: &LookupIndex) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("State"),
        header_cell("Name"),
        header_cell("Cities"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for state in index.states() {
        table.add_row(vec![
            id_cell(&state.id),
            Cell::new(&state.name),
            Cell::new(index.cities_by_state(&state.id).len()),
        ]);
    }
    println!("{table}");
}

pub fn print_cities(index: &LookupIndex, cities: &[&City]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("City"),
        header_cell("Name"),
        header_cell("State"),
        header_cell("Pincode"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for city in cities {
        let state_name = index
            .state_by_id(&city.state_id)
            .map_or("-", |state| state.name.as_str());
        table.add_row(vec![
            id_cell(&city.id),
            Cell::new(&city.name),
            Cell::new(format!("{} ({})", state_name, city.state_id)),
            Cell::new(&city.pincode),
        ]);
    }
    println!("{table}");
}

pub fn print_location(pincode: &str, location: &PostalEntry, state: &State, city: &City) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Pincode"), Cell::new(pincode)]);
    if location.pincode != pincode {
        table.add_row(vec![
            Cell::new("Matched entry"),
            dim_cell(&location.pincode),
        ]);
    }
    table.add_row(vec![
        Cell::new("State"),
        Cell::new(format!("{} ({})", state.name, state.id)),
    ]);
    table.add_row(vec![
        Cell::new("City"),
        Cell::new(format!("{} ({})", city.name, city.id)),
    ]);
    println!("{table}");
}

pub fn print_fill_report(report: &FillReport) {
    let errors = match &report.outcome {
        SubmitOutcome::Rejected(errors) => Some(errors),
        SubmitOutcome::Accepted(_) => None,
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Value"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    for field in Field::ALL {
        let value = report.record.get(field);
        let value_cell = if value.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(value)
        };
        let error_cell = match errors.and_then(|errors| errors.get(field)) {
            Some(message) => Cell::new(message).fg(Color::Red),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(field.label()), value_cell, error_cell]);
    }
    println!("{table}");

    for record in &report.advisories {
        println!("Advisory after {} change: {:?}", record.field.label(), record.advisory);
    }

    match &report.outcome {
        SubmitOutcome::Accepted(address) => {
            println!("Address saved successfully!");
            println!(
                "{}, {}",
                address.city_name.as_deref().unwrap_or("-"),
                address.state_name.as_deref().unwrap_or("-")
            );
        }
        SubmitOutcome::Rejected(errors) => {
            eprintln!("Submission rejected: {} field(s) need attention", errors.len());
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn id_cell(id: &str) -> Cell {
    Cell::new(id)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
