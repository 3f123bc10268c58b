//! Literal and glob-pattern removal.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::read::read_dir_content;
use crate::report::{ReportRemove, ReportRemoveBuilder};
use crate::spec::FsError;
use crate::util::{compile_glob, remove_all};

const CHARS_GLOB_META: [char; 3] = ['*', '?', '['];

/// Remove a path, or every entry matching a glob in its final segment.
///
/// - Final segment without `*`, `?` or `[`: removed as a literal path
///   (recursively for directories). A missing target is not an error.
/// - Otherwise the final segment is matched against the names in its parent
///   directory. Matching directories are removed recursively, everything
///   else is unlinked.
///
/// Removal stops at the first failure; entries removed before it stay removed.
pub fn remove_by_glob<P>(pattern: P) -> Result<ReportRemove, FsError>
where
    P: AsRef<Path>,
{
    let path_pattern = pattern.as_ref();
    let mut builder_rm_report = ReportRemoveBuilder::default();

    let Some(c_name_pattern) = path_pattern
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| name.contains(CHARS_GLOB_META))
    else {
        builder_rm_report.add_scanned();
        if remove_all(path_pattern)? {
            debug!("Removed {}", path_pattern.display());
            builder_rm_report.add_matched();
            builder_rm_report.add_removed();
        }
        return Ok(builder_rm_report.build());
    };

    let path_dir = match path_pattern.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let l_names = read_dir_content(&path_dir).map_err(FsError::into_read)?;
    let matcher = compile_glob(&c_name_pattern)?;

    for name in l_names {
        builder_rm_report.add_scanned();
        if !matcher.is_match(&name) {
            continue;
        }
        builder_rm_report.add_matched();

        let path_child = path_dir.join(&name);
        if remove_all(&path_child)? {
            debug!("Removed {}", path_child.display());
            builder_rm_report.add_removed();
        } else {
            warn!("Entry vanished before removal: {}", path_child.display());
        }
    }

    Ok(builder_rm_report.build())
}
