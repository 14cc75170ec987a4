//! Test helpers for writing map files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const CAMPUS_MAP: &str = "\
# Campus walkways
32 36 70 0
32 56 90 40
36 26 40 0
26 16 30 0
16 56 35 0
32 76 54 23
76 68 40 0
68 56 80 60
";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace")
}

/// Write the campus map into `dir` and return its path.
pub(super) fn write_campus_map(dir: &Utf8Path) -> Utf8PathBuf {
    let path = dir.join("campus.map");
    write_utf8(&path, CAMPUS_MAP.as_bytes());
    path
}
