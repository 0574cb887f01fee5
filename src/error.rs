use std::io;

/// Failures talking to the console. The tree itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the next line of input failed.
    #[error("failed to read from the console: {0}")]
    Input(#[source] io::Error),
    /// Writing a prompt or result failed.
    #[error("failed to write to the console: {0}")]
    Output(#[source] io::Error),
}
