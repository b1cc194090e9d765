use std::path::{Path, PathBuf};

use cargo_toml::Manifest;

pub(crate) type TaskResult = Result<(), Box<dyn std::error::Error>>;

pub(crate) fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Current version, read from the binary crate manifest.
pub(crate) fn get_version() -> Result<String, Box<dyn std::error::Error>> {
    let manifest_path = project_root()
        .join("crates")
        .join("prnotify")
        .join("Cargo.toml");
    let manifest = Manifest::from_path(manifest_path)?;

    manifest
        .package
        .map(|package| package.version().to_string())
        .ok_or_else(|| "prnotify manifest has no package section".into())
}
