use argh::FromArgs;

use crate::common::TaskResult;

/// format the workspace
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "fmt")]
pub(crate) struct FormatTask {
    /// only check formatting, fail on changes
    #[argh(switch, short = 'c')]
    check: bool,
}

impl FormatTask {
    pub fn handle(self) -> TaskResult {
        let mut args = vec!["fmt", "--all"];
        if self.check {
            args.extend(["--", "--check"]);
        }

        duct::cmd("cargo", args).run()?;
        Ok(())
    }
}
