//! Run failure reporting, in the workflow command format.

/// Build the `::error::` workflow command marking the run as failed.
pub fn failure_command(message: &str) -> String {
    format!("::error::{}", escape_data(message))
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
