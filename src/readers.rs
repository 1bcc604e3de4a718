//! Input and output plumbing.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Open the input source: the given file, or stdin when no path is set.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead + Send>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open logfile {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Open the output sink: the given file, or stdout when no path is set.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
