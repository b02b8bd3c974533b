use std::path::Path;

/// Receives the lifecycle events of a fixture run.
///
/// Every method has a no-op default so sinks only implement what they show.
pub trait Progress {
    /// The output file is open and writing is about to begin
    fn started(&mut self, _path: &Path) {}

    /// `rows_written` rows are on their way to the file
    fn advanced(&mut self, _rows_written: usize) {}

    /// The last row has been written and flushed
    fn finished(&mut self, _rows_written: usize) {}
}

/// Prints human readable progress lines to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn started(&mut self, path: &Path) {
        println!("Creating \"{}\" file...", path.display());
    }

    fn advanced(&mut self, rows_written: usize) {
        println!("{} lines", rows_written);
    }

    fn finished(&mut self, _rows_written: usize) {
        println!("DONE!");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {}
