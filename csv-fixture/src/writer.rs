use std::fs::{self, File};
use std::io;

use csv::{Writer, WriterBuilder};
use log::{debug, info};

use crate::config::FixtureConfig;
use crate::error::FixtureError;
use crate::progress::Progress;
use crate::table::Row;

/// Writes every row as one CSV record, reporting to `progress` each time the
/// running count of written rows reaches a multiple of `interval`.
/// An `interval` of zero never reports.
///
/// # Errors
/// Errors when a record cannot be serialized or the underlying writer fails
pub fn write_rows<W: io::Write>(
    writer: &mut Writer<W>,
    rows: impl IntoIterator<Item = Row>,
    interval: usize,
    progress: &mut impl Progress,
) -> Result<usize, FixtureError> {
    let mut written = 0;
    for row in rows {
        writer.write_record(&row)?;
        written += 1;
        if interval != 0 && written % interval == 0 {
            debug!("{} rows written", written);
            progress.advanced(written);
        }
    }
    Ok(written)
}

/// Creates or truncates the file at `config.path` and fills it with `rows`.
///
/// Returns the number of rows written. The file handle is closed on every
/// path out of this function, errors included.
///
/// # Errors
/// Errors when `config` is invalid, when the file cannot be created (missing
/// parent directory without `create_dirs`, permission denied) or when writing fails
pub fn save_table_to_csv(
    config: &FixtureConfig,
    rows: impl IntoIterator<Item = Row>,
    progress: &mut impl Progress,
) -> Result<usize, FixtureError> {
    config.validate()?;

    if config.create_dirs {
        if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            debug!("Creating directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(&config.path)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(config.delimiter)
        .terminator(config.terminator.into())
        .from_writer(file);
    info!("Writing fixture to {}", config.path.display());
    progress.started(&config.path);

    let written = write_rows(&mut writer, rows, config.progress_interval, progress)?;
    writer.flush()?;

    info!("Wrote {} rows to {}", written, config.path.display());
    progress.finished(written);
    Ok(written)
}

/// Writes the placeholder table described by `config`
///
/// # Errors
/// See [`save_table_to_csv`]
pub fn generate_fixture(
    config: &FixtureConfig,
    progress: &mut impl Progress,
) -> Result<usize, FixtureError> {
    save_table_to_csv(config, config.table(), progress)
}
