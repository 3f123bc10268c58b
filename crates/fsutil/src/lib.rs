//! `fsutil` v1:
//! Filesystem convenience helpers.
//!
//! Modules:
//! - `read`   : directory listing and bounded file reads
//! - `remove` : literal and glob-pattern removal
//! - `copy`   : recursive copy of a file or directory tree
//! - `spec`   : enums/options/errors
//! - `report` : run-time report models
//! - `util`   : shared helper functions
//!
//! Every call is synchronous and self-contained; partial work is never
//! rolled back when a call fails.

pub mod copy;
pub mod read;
pub mod remove;
pub mod report;
pub mod spec;
mod util;

pub use copy::{copy_dir_or_file, copy_dir_or_file_with_filter, copy_dir_or_file_with_options};
pub use read::{read_dir_content, read_file};
pub use remove::remove_by_glob;
pub use report::{ReportCopy, ReportRemove};
pub use spec::{
    EnumCopyPatternMode, EnumFsErrorKind, FsError, NAME_EXCLUDED_DEFAULT, SpecCopyOptions,
};
pub use util::{Closable, close_and_check_error};
