use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use board_core::JobCollection;
use board_logging::board_info;

use crate::decode::decode_text;
use crate::parse::{parse_jobs_str, MalformedInput, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSettings {
    /// Files larger than this are refused before reading.
    pub max_bytes: u64,
    /// Also skip records whose posted time does not parse into a value and unit.
    pub require_parseable_posted: bool,
}

impl Default for LoadSettings {
    fn default() -> Self {
        Self {
            max_bytes: 16 * 1024 * 1024,
            require_parseable_posted: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file too large (max {max_bytes} bytes, actual {actual})")]
    TooLarge { max_bytes: u64, actual: u64 },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Read, decode and validate a job file in one go.
pub fn load_jobs_from_path(
    path: &Path,
    settings: &LoadSettings,
) -> Result<JobCollection, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(io_err)?.len();
    check_size(size, settings)?;

    let bytes = fs::read(path).map_err(io_err)?;
    board_info!("Loading jobs from {:?} ({} bytes)", path, bytes.len());
    load_jobs_from_bytes(&bytes, settings)
}

pub fn load_jobs_from_bytes(
    bytes: &[u8],
    settings: &LoadSettings,
) -> Result<JobCollection, LoadError> {
    check_size(bytes.len() as u64, settings)?;
    let decoded = decode_text(bytes).map_err(|err| ParseError::from(MalformedInput::from(err)))?;
    Ok(parse_jobs_str(&decoded.text, settings)?)
}

fn check_size(actual: u64, settings: &LoadSettings) -> Result<(), LoadError> {
    if actual > settings.max_bytes {
        return Err(LoadError::TooLarge {
            max_bytes: settings.max_bytes,
            actual,
        });
    }
    Ok(())
}
