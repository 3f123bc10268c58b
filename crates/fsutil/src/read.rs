//! Directory listing and bounded single-shot file reads.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::spec::FsError;
use crate::util::close_and_check_error;

/// List the names of the immediate children of `dir`.
///
/// Names come back in whatever order the filesystem yields them. Non UTF-8
/// names are decoded lossily.
pub fn read_dir_content<P>(dir: P) -> Result<Vec<String>, FsError>
where
    P: AsRef<Path>,
{
    let path_dir = dir.as_ref();
    let mut iter_entries = fs::read_dir(path_dir).map_err(|e| FsError::Open {
        path: path_dir.to_path_buf(),
        source: e,
    })?;

    let res_names = iter_entries
        .by_ref()
        .map(|entry_res| {
            entry_res
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .map_err(|e| FsError::Read {
                    path: path_dir.to_path_buf(),
                    source: e,
                })
        })
        .collect::<Result<Vec<_>, _>>();
    close_and_check_error(res_names, iter_entries, path_dir)
}

/// Read at most `size` bytes of `file` with a single read call.
///
/// The returned buffer is always exactly `size` bytes long. When the file is
/// shorter, or the read returns fewer bytes, the tail stays zero-filled; this
/// is not a read-to-EOF loop.
pub fn read_file<P>(file: P, size: usize) -> Result<Vec<u8>, FsError>
where
    P: AsRef<Path>,
{
    let path_file = file.as_ref();
    let mut reader = fs::File::open(path_file).map_err(|e| FsError::Open {
        path: path_file.to_path_buf(),
        source: e,
    })?;

    let mut buf = vec![0_u8; size];
    let res_read = loop {
        match reader.read(&mut buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => break other,
        }
    };
    let res_read = res_read.map(|_| buf).map_err(|e| FsError::Read {
        path: path_file.to_path_buf(),
        source: e,
    });
    close_and_check_error(res_read, reader, path_file)
}
