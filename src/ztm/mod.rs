use std::{
    fs::{self, File},
    io::{self, Read},
    path::PathBuf,
    time::Instant,
};
use thiserror::Error;
use tracing::debug;
use zip::ZipArchive;

mod config;
mod data;
mod reader;
mod simplify;
pub mod models;

pub use config::*;
pub use data::*;
pub use simplify::simplify;

use reader::Reader;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

/// A structural defect in the export. Fatal by design: a record that breaks
/// its own contract means the whole file can no longer be trusted, so the
/// parse aborts without returning partial data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("line {line}: {kind} record has {got} fields, expected at least {want}")]
    MissingFields {
        kind: &'static str,
        line: usize,
        want: usize,
        got: usize,
    },
    #[error("line {line}: could not parse coordinate {value:?}")]
    Coordinate { line: usize, value: String },
    #[error("line {line}: could not parse departure time {value:?}")]
    Time { line: usize, value: String },
    #[error("line {line}: stop {stop} references unknown group {group}")]
    UnknownGroup {
        line: usize,
        stop: String,
        group: String,
    },
    #[error("line {line}: negative travel time on route {route} ({from} -> {to})")]
    NegativeDuration {
        line: usize,
        route: String,
        from: String,
        to: String,
    },
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Text(String),
    File(PathBuf),
    Zip(PathBuf),
}

/// Entry point to the format layer. Point it at an export and call
/// [`parse`](Self::parse); each call produces a fresh [`Timetable`].
///
/// The reader works on decoded text. ZTM ships its exports in a legacy
/// code page, and transcoding those bytes to UTF-8 is the caller's concern;
/// the file and zip backends fall back to lossy UTF-8 decoding.
#[derive(Default)]
pub struct Ztm {
    config: Config,
    storage: StorageType,
}

impl Ztm {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_text(mut self, text: impl Into<String>) -> Self {
        self.storage = StorageType::Text(text.into());
        self
    }

    pub fn from_path(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::File(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    pub fn parse(&self) -> Result<Timetable, self::Error> {
        let text = match &self.storage {
            StorageType::None => return Ok(Timetable::default()),
            StorageType::Text(text) => text.clone(),
            StorageType::File(path) => {
                let bytes = fs::read(path)?;
                String::from_utf8_lossy(&bytes).into_owned()
            }
            StorageType::Zip(path) => read_from_zip(path, self.config.archive_file_name.as_deref())?,
        };

        debug!("Parsing timetable...");
        let now = Instant::now();
        let timetable = Reader::new(&self.config).parse(&text)?;
        debug!("Parsing timetable took {:?}", now.elapsed());
        Ok(timetable)
    }
}

fn read_from_zip(zip_path: &PathBuf, file_name: Option<&str>) -> Result<String, self::Error> {
    let zip_file = File::open(zip_path)?;
    let mut archive = ZipArchive::new(zip_file)?;
    let index = match file_name {
        Some(name) => archive
            .index_for_name(name)
            .ok_or_else(|| self::Error::FileNotFound(name.to_string()))?,
        None => find_timetable_entry(&archive)?,
    };
    let mut file = archive.by_index(index)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// ZTM archives carry a single `RAyymmdd.TXT` member whose name changes with
/// every publication, so with no configured name the first `.txt` entry wins.
fn find_timetable_entry(archive: &ZipArchive<File>) -> Result<usize, self::Error> {
    let name = archive
        .file_names()
        .find(|name| name.to_ascii_lowercase().ends_with(".txt"))
        .map(str::to_string)
        .ok_or_else(|| self::Error::FileNotFound("*.txt".to_string()))?;
    archive
        .index_for_name(&name)
        .ok_or(self::Error::FileNotFound(name))
}
