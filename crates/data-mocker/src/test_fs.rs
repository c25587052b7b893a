//! Capability-scoped scratch files for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};

/// Creates a fresh directory under `target/data-mocker-tests` and returns a
/// path to `file_name` inside it.
pub(crate) fn unique_temp_path(prefix: &str, file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("data-mocker-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
    root.create_dir_all(&dir).expect("create temp dir");
    dir.join(file_name)
}

/// Writes `contents` to a unique scratch file.
pub(crate) fn write_temp_file(prefix: &str, file_name: &str, contents: &str) -> Utf8PathBuf {
    let path = unique_temp_path(prefix, file_name);
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).expect("open temp dir");
    let name = path.file_name().expect("temp file name");
    dir.write(name, contents).expect("write temp file");
    path
}

/// Removes the scratch directory holding `path` when dropped.
pub(crate) struct TempCleanup(pub(crate) Utf8PathBuf);

impl Drop for TempCleanup {
    fn drop(&mut self) {
        let Some(parent) = self.0.parent() else {
            return;
        };
        if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
            drop(root.remove_dir_all(parent));
        }
    }
}
