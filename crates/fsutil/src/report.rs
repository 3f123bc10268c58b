//! Run summaries for copy and remove operations.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters for one `copy_dir_or_file` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportCopy {
    /// Source entries inspected (top-level source included).
    pub cnt_scanned: u64,
    /// Regular files written to the destination.
    pub cnt_copied: u64,
    /// Directories created or reused at the destination.
    pub cnt_dirs: u64,
    /// Children skipped by the exclusion predicate.
    pub cnt_skipped: u64,
}

impl ReportCopy {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_dirs".to_string(), self.cnt_dirs);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} copied={} dirs={} skipped={}",
            self.cnt_scanned, self.cnt_copied, self.cnt_dirs, self.cnt_skipped
        )
    }
}

impl fmt::Display for ReportCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[COPY]"))
    }
}

/// Mutable accumulator threaded through the copy walk.
#[derive(Debug, Default, Clone)]
pub(crate) struct ReportCopyBuilder {
    cnt_scanned: u64,
    cnt_copied: u64,
    cnt_dirs: u64,
    cnt_skipped: u64,
}

impl ReportCopyBuilder {
    pub(crate) fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub(crate) fn add_copied(&mut self) {
        self.cnt_copied += 1;
    }

    pub(crate) fn add_dir(&mut self) {
        self.cnt_dirs += 1;
    }

    pub(crate) fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    pub(crate) fn build(self) -> ReportCopy {
        ReportCopy {
            cnt_scanned: self.cnt_scanned,
            cnt_copied: self.cnt_copied,
            cnt_dirs: self.cnt_dirs,
            cnt_skipped: self.cnt_skipped,
        }
    }
}

/// Aggregate counters for one `remove_by_glob` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportRemove {
    /// Entries tested against the pattern.
    pub cnt_scanned: u64,
    /// Entries that matched.
    pub cnt_matched: u64,
    /// Entries actually removed.
    pub cnt_removed: u64,
}

impl ReportRemove {
    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_removed".to_string(), self.cnt_removed);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} scanned={} matched={} removed={}",
            self.cnt_scanned, self.cnt_matched, self.cnt_removed
        )
    }
}

impl fmt::Display for ReportRemove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[REMOVE]"))
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ReportRemoveBuilder {
    cnt_scanned: u64,
    cnt_matched: u64,
    cnt_removed: u64,
}

impl ReportRemoveBuilder {
    pub(crate) fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub(crate) fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    pub(crate) fn add_removed(&mut self) {
        self.cnt_removed += 1;
    }

    pub(crate) fn build(self) -> ReportRemove {
        ReportRemove {
            cnt_scanned: self.cnt_scanned,
            cnt_matched: self.cnt_matched,
            cnt_removed: self.cnt_removed,
        }
    }
}
