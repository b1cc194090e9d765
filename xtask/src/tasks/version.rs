use std::fs;

use argh::FromArgs;
use regex::Regex;

use crate::common::{get_version, project_root, TaskResult};

/// set the version of every prnotify crate
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "set-version")]
pub(crate) struct SetVersionTask {
    /// new version
    #[argh(positional)]
    version: String,
}

impl SetVersionTask {
    pub fn handle(self) -> TaskResult {
        let version_rgx = Regex::new(r#"(?m)^version = ".*"$"#)?;
        let previous = get_version()?;

        for entry in fs::read_dir(project_root().join("crates"))? {
            let entry = entry?;
            if !entry.file_name().to_string_lossy().starts_with("prnotify") {
                continue;
            }

            let manifest = entry.path().join("Cargo.toml");
            let contents = fs::read_to_string(&manifest)?;
            let replaced =
                version_rgx.replace(&contents, format!("version = \"{}\"", self.version));
            fs::write(&manifest, replaced.as_bytes())?;
        }

        println!("{} -> {}", previous, self.version);
        Ok(())
    }
}
