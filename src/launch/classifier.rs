//! Selection classifier — selected entries → per-flag file buckets.

use std::path::{Path, PathBuf};

use crate::store::{EntryKind, SelectionEntry};

/// File name of the conventionally-located generated map archive
/// inside a package directory.
pub const GENERATED_FILENAME: &str = "generated.wad";

/// Request to fold a procedurally generated map archive into the file
/// list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObligeRequest {
    /// No generated file.
    None,
    /// An explicit generated file at the given path.
    File(PathBuf),
    /// The conventional location inside the package directory.
    Generated,
}

/// Selected files partitioned by the command-line flag that carries
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFiles {
    /// DEH patches, loaded via `-deh`.
    pub deh: Vec<PathBuf>,
    /// BEX patches, loaded via `-bex`.
    pub bex: Vec<PathBuf>,
    /// Everything else, loaded via `-file`.
    pub data: Vec<PathBuf>,
}

/// Partition `selected` into patch and data buckets, preserving the
/// relative order within each bucket, and append the oblige file (if
/// requested) to the data bucket.
///
/// `package_dir` is the package's storage directory
/// (`<savepath>/<datapath>`), used to resolve
/// [`ObligeRequest::Generated`]. Infallible and side-effect-free.
pub fn classify(
    selected: &[SelectionEntry],
    oblige: &ObligeRequest,
    package_dir: &Path,
) -> ClassifiedFiles {
    let mut files = ClassifiedFiles::default();

    for entry in selected {
        match entry.kind {
            EntryKind::Deh => files.deh.push(entry.path.clone()),
            EntryKind::Bex => files.bex.push(entry.path.clone()),
            EntryKind::Wad => files.data.push(entry.path.clone()),
        }
    }

    match oblige {
        ObligeRequest::None => {}
        ObligeRequest::File(path) => files.data.push(path.clone()),
        ObligeRequest::Generated => files.data.push(package_dir.join(GENERATED_FILENAME)),
    }

    files
}
