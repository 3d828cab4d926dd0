use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dicetwist_core::{RollSnapshot, RollStats};

use super::GroupEntry;

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn stats(overall: &RollStats, per_die: &[RollStats]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Scope").add_attribute(Attribute::Bold),
        Cell::new("Min"),
        Cell::new("Max"),
        Cell::new("Average").fg(Color::Cyan),
        Cell::new("Mean (midpoint)"),
    ]);
    right_align(&mut table, 1..=4);

    let mut row = |label: String, s: &RollStats| {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(s.min),
            Cell::new(s.max),
            Cell::new(format!("{:.3}", s.average)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", s.mean)),
        ]);
    };

    row("sum".to_string(), overall);
    for (die, s) in per_die.iter().enumerate() {
        row(format!("die {die}"), s);
    }

    println!("\n{table}");
}

pub fn classification(title: &str, entries: &[GroupEntry]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(title).add_attribute(Attribute::Bold),
        Cell::new("Occurrences"),
        Cell::new("Probability").fg(Color::Green),
    ]);
    right_align(&mut table, 1..=2);

    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.group).add_attribute(Attribute::Bold),
            Cell::new(entry.occurrences),
            Cell::new(format!("{:.2}%", entry.probability * 100.0)).fg(Color::Green),
        ]);
    }

    println!("\n{table}");
}

pub fn picked(snapshots: &[RollSnapshot]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Roll").add_attribute(Attribute::Bold),
        Cell::new("Dice"),
        Cell::new("Sum").fg(Color::Cyan),
        Cell::new("Twisted").fg(Color::Magenta),
    ]);
    right_align(&mut table, 2..=3);

    for snapshot in snapshots {
        let dice = snapshot
            .values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(snapshot.roll),
            Cell::new(dice),
            Cell::new(snapshot.sum).fg(Color::Cyan),
            Cell::new(snapshot.twisted_sum).fg(Color::Magenta),
        ]);
    }

    println!("\n{table}");
}
