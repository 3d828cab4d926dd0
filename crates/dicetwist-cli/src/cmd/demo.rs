use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dicetwist_core::{DiceResult, RollConfig, RollResults};

/// Hand-picked rolls showing every cancellation shape at threshold 2.
const DEMO_ROLLS: [[u8; 3]; 6] = [
    [1, 2, 3],
    [3, 2, 2],
    [3, 3, 3],
    [3, 3, 2],
    [6, 6, 6],
    [1, 5, 5],
];

#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Cancellation threshold: faces repeated in exact multiples of this
    /// count contribute nothing.
    #[arg(short, long, default_value_t = 2)]
    pub threshold: u32,
}

pub fn run(args: DemoArgs) -> DiceResult<()> {
    let config = RollConfig::new(DEMO_ROLLS.len(), 3, 6)?;
    let mut results = RollResults::new(config);
    for (roll, values) in DEMO_ROLLS.iter().enumerate() {
        results.set_roll_values(roll, values)?;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Roll").add_attribute(Attribute::Bold),
        Cell::new("Dice"),
        Cell::new("Sum").fg(Color::Cyan),
        Cell::new(format!("Twisted (t={})", args.threshold)).fg(Color::Magenta),
    ]);
    for i in 2..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for roll in 0..results.rolls_count() {
        let values = results
            .values(roll)?
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(vec![
            Cell::new(roll),
            Cell::new(values),
            Cell::new(results.sum(roll)?).fg(Color::Cyan),
            Cell::new(results.twisted_sum(roll, args.threshold)?).fg(Color::Magenta),
        ]);
    }

    println!("\n{table}");
    Ok(())
}
