use argh::FromArgs;

use crate::common::TaskResult;

/// run clippy on the workspace
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "lint")]
pub(crate) struct LintTask {
    /// deny warnings
    #[argh(switch, short = 'e')]
    error: bool,
}

impl LintTask {
    pub fn handle(self) -> TaskResult {
        let mut args = vec!["clippy", "--workspace", "--all-features", "--tests"];
        if self.error {
            args.extend(["--", "-D", "warnings"]);
        }

        duct::cmd("cargo", args).run()?;
        Ok(())
    }
}
