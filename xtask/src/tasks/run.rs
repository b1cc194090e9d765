use argh::FromArgs;

use crate::common::TaskResult;

/// run prnotify on a local event payload
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "run")]
pub(crate) struct RunTask {
    /// event payload file
    #[argh(positional)]
    event_path: String,

    /// really call GitHub and Slack
    #[argh(switch, short = 'l')]
    live: bool,

    /// trace messages
    #[argh(switch, short = 't')]
    trace: bool,
}

impl RunTask {
    pub fn handle(self) -> TaskResult {
        let mut args = vec!["run", "-p", "prnotify", "--", "--event-path", self.event_path.as_str()];
        if !self.live {
            args.push("--dry-run");
        }

        let mut command = duct::cmd("cargo", args);
        if self.trace {
            command = command.env("RUST_LOG", "info,prnotify=trace");
        }

        command.run()?;
        Ok(())
    }
}
