//! Times writing and re-reading the full size fixture.
//! can be run with `cargo run --release --example benchmark`

use std::error::Error;
use std::time::Instant;

use log::warn;

use csv_fixture::config::FixtureConfig;
use csv_fixture::progress::NoProgress;
use csv_fixture::verify::verify_csv;
use csv_fixture::writer::generate_fixture;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = FixtureConfig {
        path: std::env::temp_dir().join("csv-fixture-benchmark.csv"),
        ..FixtureConfig::default()
    };

    let start = Instant::now();
    let rows = generate_fixture(&config, &mut NoProgress)?;
    let elapsed = start.elapsed();
    warn!("Writing {} rows took: {:.2?}", rows, elapsed);

    let start_verify = Instant::now();
    verify_csv(&config)?;
    warn!("Verifying took: {:.2?}", start_verify.elapsed());

    warn!("Total took: {:.2?}", start.elapsed());
    std::fs::remove_file(&config.path)?;

    Ok(())
}
