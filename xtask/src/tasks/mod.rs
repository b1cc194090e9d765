use argh::FromArgs;

use self::{
    format::FormatTask, lint::LintTask, run::RunTask, test::TestTask, version::SetVersionTask,
};

mod format;
mod lint;
mod run;
mod version;

/// Tasks
#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub(crate) enum Tasks {
    Format(FormatTask),
    Lint(LintTask),
    Test(TestTask),
    Run(RunTask),
    SetVersion(SetVersionTask),
}
