use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use csv_fixture::config::{
    FixtureConfig, LineTerminator, DEFAULT_COLUMNS, DEFAULT_PATH, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_ROWS,
};
use csv_fixture::progress::ConsoleProgress;
use csv_fixture::verify::verify_csv;
use csv_fixture::writer::generate_fixture;

/// Generates a CSV fixture of placeholder headers and cells
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Total number of rows, header row included
    #[clap(short, long, default_value_t = DEFAULT_ROWS)]
    pub(crate) rows: usize,
    /// Number of cells in every row
    #[clap(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub(crate) columns: usize,
    /// File to create or overwrite
    #[clap(short, long, default_value = DEFAULT_PATH)]
    pub(crate) output: PathBuf,
    /// Print a progress line every this many rows
    #[clap(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
    pub(crate) progress_every: usize,
    /// Field delimiter, a single ASCII character
    #[clap(long, default_value_t = ',')]
    pub(crate) delimiter: char,
    /// End records with \r\n instead of \n
    #[clap(long)]
    pub(crate) crlf: bool,
    /// Create missing parent directories of the output file
    #[clap(long)]
    pub(crate) create_dirs: bool,
    /// Read the file back afterwards and check it against the generated rows
    #[clap(long)]
    pub(crate) verify: bool,
}

impl Cli {
    fn config(&self) -> Result<FixtureConfig, Box<dyn Error>> {
        let config = FixtureConfig {
            rows: self.rows,
            columns: self.columns,
            path: self.output.clone(),
            progress_interval: self.progress_every,
            delimiter: u8::try_from(self.delimiter)?,
            terminator: if self.crlf {
                LineTerminator::Crlf
            } else {
                LineTerminator::Lf
            },
            create_dirs: self.create_dirs,
        };
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config()?;

    generate_fixture(&config, &mut ConsoleProgress)?;

    if cli.verify {
        let rows = verify_csv(&config)?;
        info!("{} rows match the generated table", rows);
        println!("Verified {} rows", rows);
    }

    Ok(())
}
