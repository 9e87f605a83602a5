mod data;
mod plot;

use std::path::Path;

use anyhow::Result;

use data::error::DataError;
use data::loader::load_table;
use data::sample::sample_rows;
use data::stats::column_summary;

const INPUT_PATH: &str = "data.csv";
const COLUMN: &str = "value";
const SAMPLE_COUNT: usize = 5;
const PLOT_PATH: &str = "values.png";

fn run() -> Result<()> {
    let table = load_table(Path::new(INPUT_PATH), COLUMN)?;
    log::info!(
        "loaded {} rows, {} columns from {INPUT_PATH}",
        table.len(),
        table.columns.len()
    );

    let summary = column_summary(&table, COLUMN)?;
    println!("average is {}", summary.mean);
    println!("std dev is {}", summary.std_dev);

    println!("sample rows:");
    let sampled = sample_rows(&table, SAMPLE_COUNT, true)?;
    for row in &sampled.rows {
        println!("{row}");
    }

    plot::plot_column(&table, COLUMN, "Values", Path::new(PLOT_PATH))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    if let Err(err) = run() {
        // Problems with the input data are reported and exit normally;
        // anything else (I/O, rendering) propagates.
        match err.downcast_ref::<DataError>() {
            Some(data_err) if data_err.is_input_error() => println!("Error: {data_err}"),
            _ => return Err(err),
        }
    }
    Ok(())
}
