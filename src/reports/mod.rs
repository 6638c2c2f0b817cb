use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use coverforge::core_types::GenerationRecord;
use coverforge::geometry::{AntennaSpec, Position};
use coverforge::scorer::ScoreDetails;

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_placement_table(specs: &[AntennaSpec], placement: &[Position]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Antenna").add_attribute(Attribute::Bold),
        Cell::new("Range"),
        Cell::new("Speed"),
        Cell::new("X").fg(Color::Cyan),
        Cell::new("Y").fg(Color::Cyan),
    ]);

    for (id, (spec, pos)) in specs.iter().zip(placement).enumerate() {
        table.add_row(vec![
            Cell::new(id).add_attribute(Attribute::Bold),
            Cell::new(spec.range),
            Cell::new(spec.speed),
            Cell::new(pos.x),
            Cell::new(pos.y),
        ]);
    }
    right_align(&mut table, 0..=4);

    println!("\n{}", table);
}

pub fn print_score_report(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Placement").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Links"),
        Cell::new("Reward").fg(Color::Green),
        Cell::new("Served"),
        Cell::new("Unserved").fg(Color::Red),
    ]);

    for (name, d) in results {
        let reward = if d.fully_connected() {
            Cell::new(d.reward_bonus).fg(Color::Green)
        } else {
            Cell::new("-")
        };
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(d.total).fg(Color::Cyan),
            Cell::new(d.connection_score),
            reward,
            Cell::new(d.connected_buildings),
            Cell::new(d.unconnected_buildings).fg(Color::Red),
        ]);
    }
    right_align(&mut table, 1..=5);

    println!("\n{}", table);
}

/// Shows at most `rows` evenly spaced generations, always including the last.
pub fn print_convergence_report(history: &GenerationRecord, rows: usize) {
    if history.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Gen").add_attribute(Attribute::Bold),
        Cell::new("Best"),
        Cell::new("Best So Far").fg(Color::Green),
    ]);

    let entries = history.entries();
    let running = history.running_max();
    let step = entries.len().div_ceil(rows.max(1)).max(1);

    for (i, e) in entries.iter().enumerate() {
        if i % step != 0 && i + 1 != entries.len() {
            continue;
        }
        table.add_row(vec![
            Cell::new(e.generation),
            Cell::new(e.best),
            Cell::new(running[i]).fg(Color::Green),
        ]);
    }
    right_align(&mut table, 0..=2);

    println!("\n{}", table);
}
