//! File-backed task stores
//!
//! * [`CsvFile`] is the flat table the `my-tasks` binary reads and writes
//! * [`JsonCache`] is a JSON document that also keeps task IDs

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaskError};
use crate::traits::TaskStore;

mod csv_file;
mod json_cache;

pub use csv_file::CsvFile;
pub use csv_file::parse_completed;
pub use json_cache::JsonCache;

/// The file formats a task list can be stored in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreFormat {
    Csv,
    Json,
}

impl StoreFormat {
    /// Guess the format from a file extension. Anything that is not `.json` is considered CSV
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => StoreFormat::Json,
            _ => StoreFormat::Csv,
        }
    }
}

/// Create the store matching the extension of `path`
pub fn open(path: &Path) -> Box<dyn TaskStore> {
    match StoreFormat::from_path(path) {
        StoreFormat::Csv => Box::new(CsvFile::new(path)),
        StoreFormat::Json => Box::new(JsonCache::new(path)),
    }
}

/// Open a file for reading, or return `None` if it does not exist
fn open_existing(path: &Path) -> Result<Option<File>> {
    match File::open(path) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No task file at {:?} yet, starting with an empty list", path);
            Ok(None)
        },
        Err(err) => Err(TaskError::Storage{ path: path.to_path_buf(), source: err }),
    }
}

/// The sibling file a store is written to before it replaces the real one
fn temporary_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(OsString::from).unwrap_or_default();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/// Write a whole file through `write`, so that the previous content stays in place until it succeeds
fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(File) -> Result<()>,
{
    let temporary = temporary_path(path);
    let file = File::create(&temporary)
        .map_err(|err| TaskError::Storage{ path: temporary.clone(), source: err })?;

    if let Err(err) = write(file) {
        if let Err(rm_err) = fs::remove_file(&temporary) {
            log::warn!("Unable to remove {:?}: {}", temporary, rm_err);
        }
        return Err(err);
    }

    fs::rename(&temporary, path)
        .map_err(|err| TaskError::Storage{ path: path.to_path_buf(), source: err })
}
