//! Entrypoint.

fn main() {
    if let Err(err) = prnotify::initialize_command_line() {
        println!("{}", prnotify::failure_command(&err.to_string()));
        std::process::exit(1);
    }
}
