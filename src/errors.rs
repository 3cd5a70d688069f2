//! The errors seqinfo can return; only when opening, reading or naming input files

use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The type of error that occurred while summarizing a file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InfoErrorKind {
    /// The input could not be opened
    Open,
    /// An error happened while reading or decompressing the stream
    Read,
    /// A result could not be written out
    Write,
    /// The absolute path of an input could not be resolved
    PathResolution,
    /// The set of missing-data characters is empty
    InvalidMissingSet,
}

/// The only error type that seqinfo returns
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoError {
    /// A description of what went wrong
    pub msg: String,
    /// The type of error that occurred
    pub kind: InfoErrorKind,
    /// The input we were working on, if any
    pub path: Option<PathBuf>,
}

impl InfoError {
    pub fn new_open<P: AsRef<Path>>(path: P, err: &io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: InfoErrorKind::Open,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn new_read<P: AsRef<Path>>(path: P, err: &io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: InfoErrorKind::Read,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn new_write(err: &io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: InfoErrorKind::Write,
            path: None,
        }
    }

    pub fn new_path_resolution<P: AsRef<Path>>(path: P, err: &io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: InfoErrorKind::PathResolution,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn new_empty_missing_set() -> Self {
        Self {
            msg: String::from("the set of missing-data characters cannot be empty"),
            kind: InfoErrorKind::InvalidMissingSet,
            path: None,
        }
    }
}

impl fmt::Display for InfoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let path = self
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<stream>"));
        match self.kind {
            InfoErrorKind::Open => write!(f, "failed in opening file {}: {}", path, self.msg),
            InfoErrorKind::Read => write!(f, "failed reading {}: {}", path, self.msg),
            InfoErrorKind::Write => write!(f, "failed writing results: {}", self.msg),
            InfoErrorKind::PathResolution => {
                write!(f, "failed getting realpath of infile {}: {}", path, self.msg)
            }
            InfoErrorKind::InvalidMissingSet => write!(f, "{}", self.msg),
        }
    }
}

impl From<io::Error> for InfoError {
    fn from(err: io::Error) -> Self {
        Self {
            msg: err.to_string(),
            kind: InfoErrorKind::Read,
            path: None,
        }
    }
}

impl StdError for InfoError {}
