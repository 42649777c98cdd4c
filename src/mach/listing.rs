use crate::error;
use crate::lang::Error;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tracing::debug;

/// ## Program source as entered or loaded
///
/// One element per line. Files are written one element per line
/// with no escaping, so a save followed by a load gives back the
/// same lines.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    source: Vec<String>,
}

impl Listing {
    pub fn new() -> Listing {
        Listing::default()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn push(&mut self, line: &str) {
        self.source.push(line.to_string())
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.source.iter().map(|s| s.as_str())
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Listing, Error> {
        let filename = filename.as_ref();
        let reader = match File::open(filename) {
            Ok(file) => BufReader::new(file),
            Err(error) => return Err(io_error(filename, error)),
        };
        let mut listing = Listing::new();
        for line in reader.lines() {
            match line {
                Ok(line) => listing.push(&line),
                Err(error) => return Err(io_error(filename, error)),
            }
        }
        debug!(path = %filename.display(), lines = listing.len(), "loaded listing");
        Ok(listing)
    }

    pub fn save<P: AsRef<Path>>(&self, filename: P) -> Result<(), Error> {
        let filename = filename.as_ref();
        let file = match File::create(filename) {
            Ok(file) => file,
            Err(error) => return Err(io_error(filename, error)),
        };
        let mut writer = BufWriter::new(file);
        for line in self.lines() {
            if let Err(error) = writeln!(writer, "{}", line) {
                return Err(io_error(filename, error));
            }
        }
        if let Err(error) = writer.flush() {
            return Err(io_error(filename, error));
        }
        debug!(path = %filename.display(), lines = self.len(), "saved listing");
        Ok(())
    }
}

fn io_error(filename: &Path, error: std::io::Error) -> Error {
    let msg = format!("{}: {}", filename.display(), error);
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound; &msg),
        _ => error!(DiskIoError; &msg),
    }
}

impl<S: AsRef<str>> std::iter::FromIterator<S> for Listing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Listing {
        Listing {
            source: iter.into_iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }
}
