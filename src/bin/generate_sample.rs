use anyhow::{Context, Result};
use rand::Rng;

/// Write a demo `data.csv` into the working directory: a numeric `value`
/// column (noisy sine) plus two metadata columns.
fn main() -> Result<()> {
    let mut rng = rand::thread_rng();

    let samples = ["Sample_A", "Sample_B", "Sample_C"];
    let operators = ["Alice", "Bob"];
    let n_rows = 100;

    let output_path = "data.csv";
    let mut writer = csv::Writer::from_path(output_path).context("creating output file")?;
    writer.write_record(["value", "sample", "operator"])?;

    for i in 0..n_rows {
        let signal = (i as f64 * 0.1).sin() * 5.0;
        let value = signal + rng.gen_range(-0.5..0.5);
        let sample = samples[rng.gen_range(0..samples.len())];
        let operator = operators[rng.gen_range(0..operators.len())];

        writer.write_record([format!("{value:.4}"), sample.to_string(), operator.to_string()])?;
    }
    writer.flush().context("flushing output file")?;

    println!("Wrote {n_rows} rows to {output_path}");
    Ok(())
}
