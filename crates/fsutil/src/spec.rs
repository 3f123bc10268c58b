//! Option models, enums and the crate error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Name skipped by default when copying directory children.
pub const NAME_EXCLUDED_DEFAULT: &str = "default";

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Pattern matching mode for the copy exclusion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumCopyPatternMode {
    /// Shell-like wildcards (`*`, `?`, character classes).
    Glob,
    /// Regular expression pattern.
    Regex,
    /// Exact name match.
    Literal,
}

/// Originating operation of an [`FsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumFsErrorKind {
    Open,
    Read,
    Stat,
    Mkdir,
    Create,
    Copy,
    Remove,
    Close,
    Metadata,
    Pattern,
    InvalidArgument,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Input options for [`crate::copy_dir_or_file_with_options`].
#[derive(Debug, Clone)]
pub struct SpecCopyOptions {
    /// Child names skipped while walking a source directory.
    pub patterns_exclude_names: Option<Vec<String>>,
    /// Pattern interpretation mode for `patterns_exclude_names`.
    pub rule_pattern: EnumCopyPatternMode,
    /// Copy access/modification times along with permission bits.
    pub if_preserve_times: bool,
}

impl Default for SpecCopyOptions {
    fn default() -> Self {
        Self {
            patterns_exclude_names: Some(vec![NAME_EXCLUDED_DEFAULT.to_string()]),
            rule_pattern: EnumCopyPatternMode::Literal,
            if_preserve_times: false,
        }
    }
}

/// Errors returned by every helper in this crate.
///
/// Each variant names the filesystem operation that failed and keeps the
/// underlying [`io::Error`] as its source.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create directory {}: {source}", .path.display())]
    Mkdir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to copy {} -> {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to close {}: {source}", .path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to apply metadata to {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl FsError {
    /// Tag of the operation that produced this error.
    pub fn kind(&self) -> EnumFsErrorKind {
        match self {
            Self::Open { .. } => EnumFsErrorKind::Open,
            Self::Read { .. } => EnumFsErrorKind::Read,
            Self::Stat { .. } => EnumFsErrorKind::Stat,
            Self::Mkdir { .. } => EnumFsErrorKind::Mkdir,
            Self::Create { .. } => EnumFsErrorKind::Create,
            Self::Copy { .. } => EnumFsErrorKind::Copy,
            Self::Remove { .. } => EnumFsErrorKind::Remove,
            Self::Close { .. } => EnumFsErrorKind::Close,
            Self::Metadata { .. } => EnumFsErrorKind::Metadata,
            Self::Pattern { .. } => EnumFsErrorKind::Pattern,
            Self::InvalidArgument(_) => EnumFsErrorKind::InvalidArgument,
        }
    }

    /// Re-tag a directory open failure as a read failure.
    ///
    /// Callers that list a directory as one step of a larger operation report
    /// any listing failure as [`FsError::Read`].
    pub(crate) fn into_read(self) -> Self {
        match self {
            Self::Open { path, source } => Self::Read { path, source },
            other => other,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
