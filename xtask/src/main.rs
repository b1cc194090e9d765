use argh::FromArgs;
use tasks::Tasks;

mod common;
mod tasks;

/// Development tasks
#[derive(FromArgs, Debug)]
struct Args {
    #[argh(subcommand)]
    tasks: Tasks,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();
    match args.tasks {
        Tasks::Format(cmd) => cmd.handle(),
        Tasks::Lint(cmd) => cmd.handle(),
        Tasks::Test(cmd) => cmd.handle(),
        Tasks::Run(cmd) => cmd.handle(),
        Tasks::SetVersion(cmd) => cmd.handle(),
    }
}
