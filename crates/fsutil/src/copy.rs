//! Recursive copy of a directory tree or a single file.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::read::read_dir_content;
use crate::report::{ReportCopy, ReportCopyBuilder};
use crate::spec::{FsError, SpecCopyOptions};
use crate::util::{
    Closable, apply_metadata, close_and_check_error, compile_name_patterns,
    is_destination_within_source,
};

struct SpecCopyContext<'a> {
    fn_exclude: &'a dyn Fn(&str) -> bool,
    if_preserve_times: bool,
    builder_cp_report: ReportCopyBuilder,
}

/// Copy `src` to `dst`, skipping any child named `default`.
///
/// Same as [`copy_dir_or_file_with_options`] with [`SpecCopyOptions::default`].
pub fn copy_dir_or_file<P, Q>(src: P, dst: Q) -> Result<ReportCopy, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    copy_dir_or_file_with_options(src, dst, &SpecCopyOptions::default())
}

/// Copy a file, or a directory tree, from `src` to `dst`.
///
/// - Directory: `dst` and its missing parents are created, then every child
///   not excluded by `spec_cp_options.patterns_exclude_names` is copied
///   recursively. The source mode is reapplied once the children are in place.
/// - Regular file: bytes are streamed into `dst`, which is created or
///   truncated, and the source mode is reapplied.
///
/// The first failure aborts the walk. Entries copied before it are left in
/// place. Exclusion only applies to children, never to `src` itself.
pub fn copy_dir_or_file_with_options<P, Q>(
    src: P,
    dst: Q,
    spec_cp_options: &SpecCopyOptions,
) -> Result<ReportCopy, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let spec_exclude_pats = compile_name_patterns(
        spec_cp_options.patterns_exclude_names.as_deref(),
        spec_cp_options.rule_pattern,
    )?;
    let fn_exclude = |name: &str| {
        spec_exclude_pats
            .as_ref()
            .is_some_and(|pats| pats.is_match(name))
    };
    run_copy(
        src.as_ref(),
        dst.as_ref(),
        &fn_exclude,
        spec_cp_options.if_preserve_times,
    )
}

/// Like [`copy_dir_or_file`], with a caller-supplied exclusion predicate.
///
/// `fn_exclude` receives each child name and returns `true` to skip it.
pub fn copy_dir_or_file_with_filter<P, Q, F>(
    src: P,
    dst: Q,
    fn_exclude: F,
) -> Result<ReportCopy, FsError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: Fn(&str) -> bool,
{
    run_copy(src.as_ref(), dst.as_ref(), &fn_exclude, false)
}

fn run_copy(
    path_src: &Path,
    path_dst: &Path,
    fn_exclude: &dyn Fn(&str) -> bool,
    if_preserve_times: bool,
) -> Result<ReportCopy, FsError> {
    let meta_src = stat(path_src)?;
    if meta_src.is_dir() && is_destination_within_source(path_src, path_dst) {
        return Err(FsError::InvalidArgument(format!(
            "Destination {} lies inside source directory {}",
            path_dst.display(),
            path_src.display()
        )));
    }

    let mut spec_cp_ctx = SpecCopyContext {
        fn_exclude,
        if_preserve_times,
        builder_cp_report: ReportCopyBuilder::default(),
    };
    copy_with_metadata(path_src, path_dst, &meta_src, &mut spec_cp_ctx)?;
    Ok(spec_cp_ctx.builder_cp_report.build())
}

fn stat(path: &Path) -> Result<fs::Metadata, FsError> {
    fs::metadata(path).map_err(|e| FsError::Stat {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_entry(
    path_src: &Path,
    path_dst: &Path,
    spec_cp_ctx: &mut SpecCopyContext,
) -> Result<(), FsError> {
    let meta_src = stat(path_src)?;
    copy_with_metadata(path_src, path_dst, &meta_src, spec_cp_ctx)
}

fn copy_with_metadata(
    path_src: &Path,
    path_dst: &Path,
    meta_src: &fs::Metadata,
    spec_cp_ctx: &mut SpecCopyContext,
) -> Result<(), FsError> {
    spec_cp_ctx.builder_cp_report.add_scanned();
    if meta_src.is_dir() {
        copy_dir(path_src, path_dst, meta_src, spec_cp_ctx)
    } else if meta_src.is_file() {
        copy_file(path_src, path_dst, meta_src, spec_cp_ctx)
    } else {
        Err(FsError::InvalidArgument(format!(
            "Source is neither a regular file nor a directory: {}",
            path_src.display()
        )))
    }
}

fn copy_dir(
    path_src: &Path,
    path_dst: &Path,
    meta_src: &fs::Metadata,
    spec_cp_ctx: &mut SpecCopyContext,
) -> Result<(), FsError> {
    create_dir_all_like(path_dst, meta_src)?;
    spec_cp_ctx.builder_cp_report.add_dir();
    debug!("Created directory {}", path_dst.display());

    let l_names = read_dir_content(path_src).map_err(FsError::into_read)?;
    for name in l_names {
        if (spec_cp_ctx.fn_exclude)(&name) {
            debug!("Excluded {}", path_src.join(&name).display());
            spec_cp_ctx.builder_cp_report.add_skipped();
            continue;
        }
        copy_entry(&path_src.join(&name), &path_dst.join(&name), spec_cp_ctx)?;
    }

    apply_metadata(meta_src, path_dst, spec_cp_ctx.if_preserve_times)
}

fn create_dir_all_like(path_dst: &Path, meta_src: &fs::Metadata) -> Result<(), FsError> {
    let mut dir_builder = fs::DirBuilder::new();
    dir_builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

        // Owner keeps rwx until the children are copied; the exact source
        // mode is applied afterwards.
        dir_builder.mode((meta_src.permissions().mode() & 0o7777) | 0o700);
    }
    #[cfg(not(unix))]
    {
        let _ = meta_src;
    }
    dir_builder.create(path_dst).map_err(|e| FsError::Mkdir {
        path: path_dst.to_path_buf(),
        source: e,
    })
}

fn copy_file(
    path_src: &Path,
    path_dst: &Path,
    meta_src: &fs::Metadata,
    spec_cp_ctx: &mut SpecCopyContext,
) -> Result<(), FsError> {
    let mut file_src = fs::File::open(path_src).map_err(|e| FsError::Open {
        path: path_src.to_path_buf(),
        source: e,
    })?;

    let mut open_options = fs::OpenOptions::new();
    open_options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        open_options.mode(meta_src.permissions().mode() & 0o7777);
    }
    let mut file_dst = open_options.open(path_dst).map_err(|e| FsError::Create {
        path: path_dst.to_path_buf(),
        source: e,
    })?;

    if let Err(e) = io::copy(&mut file_src, &mut file_dst) {
        let _ = file_dst.close();
        return Err(FsError::Copy {
            from: path_src.to_path_buf(),
            to: path_dst.to_path_buf(),
            source: e,
        });
    }
    close_and_check_error(Ok(()), file_dst, path_dst)?;

    apply_metadata(meta_src, path_dst, spec_cp_ctx.if_preserve_times)?;
    spec_cp_ctx.builder_cp_report.add_copied();
    debug!("Copied {} -> {}", path_src.display(), path_dst.display());
    Ok(())
}
