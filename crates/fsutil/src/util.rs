use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::spec::{EnumCopyPatternMode, FsError};

////////////////////////////////////////////////////////////////////////////////
// #region ResourceRelease

/// Resource released by value, so it can be released at most once.
pub trait Closable {
    /// Release the resource and report any failure doing so.
    fn close(self) -> io::Result<()>;
}

// `std` closes descriptors on drop and discards the result of close(2).
impl Closable for fs::File {
    fn close(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

impl Closable for fs::ReadDir {
    fn close(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

/// Release `closable`, then reconcile its close result with `result`.
///
/// The operation error wins over the close error; the close error is only
/// reported when the operation itself succeeded.
///
/// The `std::fs::File` and `std::fs::ReadDir` implementations never report a
/// close failure: `std` releases descriptors on drop and discards the result
/// of close(2). [`FsError::Close`] therefore only comes from other
/// [`Closable`] implementations.
pub fn close_and_check_error<T, C>(
    result: Result<T, FsError>,
    closable: C,
    path: &Path,
) -> Result<T, FsError>
where
    C: Closable,
{
    let res_close = closable.close();
    let value = result?;
    res_close.map_err(|e| FsError::Close {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(value)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

#[derive(Debug, Clone)]
pub(crate) enum TypeNamePatternSeq {
    Literal(Vec<String>),
    Glob(Vec<GlobMatcher>),
    Regex(Vec<Regex>),
}

impl TypeNamePatternSeq {
    pub(crate) fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Literal(v) => v.iter().any(|p| p == name),
            Self::Glob(v) => v.iter().any(|p| p.is_match(name)),
            Self::Regex(v) => v.iter().any(|p| p.is_match(name)),
        }
    }
}

/// Compile one shell glob where `*` never crosses a path separator.
pub(crate) fn compile_glob(pattern: &str) -> Result<GlobMatcher, FsError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| FsError::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

pub(crate) fn compile_name_patterns(
    patterns: Option<&[String]>,
    rule_pattern: EnumCopyPatternMode,
) -> Result<Option<TypeNamePatternSeq>, FsError> {
    let Some(patterns) = patterns else {
        return Ok(None);
    };
    if patterns.is_empty() {
        return Ok(None);
    }

    match rule_pattern {
        EnumCopyPatternMode::Literal => Ok(Some(TypeNamePatternSeq::Literal(patterns.to_vec()))),
        EnumCopyPatternMode::Glob => {
            let l_glob = patterns
                .iter()
                .map(|p| compile_glob(p))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(TypeNamePatternSeq::Glob(l_glob)))
        }
        EnumCopyPatternMode::Regex => {
            let mut l_regex = Vec::with_capacity(patterns.len());
            for pattern in patterns {
                let regex = Regex::new(pattern).map_err(|e| FsError::Pattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                l_regex.push(regex);
            }
            Ok(Some(TypeNamePatternSeq::Regex(l_regex)))
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    // Destination usually does not exist yet: resolve its deepest existing
    // ancestor and re-append the remainder.
    let path_abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    let mut path_existing = path_abs.as_path();
    let mut l_rest = Vec::new();
    while let Some(parent) = path_existing.parent() {
        if let Some(name) = path_existing.file_name() {
            l_rest.push(name.to_os_string());
        }
        path_existing = parent;
        if let Ok(resolved) = fs::canonicalize(path_existing) {
            return l_rest
                .iter()
                .rev()
                .fold(resolved, |acc, name| acc.join(name));
        }
    }
    path_abs
}

/// `true` when `dst` is `src` itself or lies anywhere below it.
pub(crate) fn is_destination_within_source(src: &Path, dst: &Path) -> bool {
    _normalize_path(dst).starts_with(_normalize_path(src))
}

/// Remove `path` whatever it is; a missing path is not an error.
///
/// Directories go with all their contents, everything else (symlinks
/// included) is unlinked without being followed. Returns `false` when there
/// was nothing to remove.
pub(crate) fn remove_all(path: &Path) -> Result<bool, FsError> {
    let meta = match fs::symlink_metadata(path) {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => {
            return Err(FsError::Remove {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    let res_remove = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match res_remove {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FsError::Remove {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Reapply source permission bits (and optionally times) to `path_dst`.
pub(crate) fn apply_metadata(
    meta_src: &fs::Metadata,
    path_dst: &Path,
    if_preserve_times: bool,
) -> Result<(), FsError> {
    let to_err = |e: io::Error| FsError::Metadata {
        path: path_dst.to_path_buf(),
        source: e,
    };
    fs::set_permissions(path_dst, meta_src.permissions()).map_err(to_err)?;
    if if_preserve_times {
        use filetime::{FileTime, set_file_times};

        let file_time_access = FileTime::from_last_access_time(meta_src);
        let file_time_modify = FileTime::from_last_modification_time(meta_src);
        set_file_times(path_dst, file_time_access, file_time_modify).map_err(to_err)?;
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
