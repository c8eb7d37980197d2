//! Test helpers for writing network documents into a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A small network: depot and two shops, a valid loop and a broken route.
pub(super) const SMALL_NETWORK: &str = r#"{
    "depot": "depot",
    "locations": [
        { "id": "depot", "latitude": 3.34, "longitude": -76.53 },
        { "id": "north", "latitude": 3.40, "longitude": -76.52 },
        { "id": "south", "latitude": 3.30, "longitude": -76.54 }
    ],
    "edges": [
        { "origin": "depot", "destination": "north", "minutes": 12 },
        { "origin": "north", "destination": "south", "minutes": 20 },
        { "origin": "south", "destination": "depot", "minutes": 8 }
    ],
    "routes": [
        { "name": "loop", "stops": ["depot", "north", "south", "depot"] },
        { "name": "broken", "legs": [["depot", "south"]] }
    ]
}"#;

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `contents` to `name` inside the workspace and return its path.
    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace").field("root", &self.root).finish()
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent.as_std_path()).expect("create parent directory");
    }
    fs::write(path.as_std_path(), contents).expect("write file");
}
