use std::io;

/// Errors that stop the terminal client.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// Reading input or writing to the terminal failed.
    #[error("Terminal I/O failed : {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("Could not open log file {path} : {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A global logger was already installed.
    #[error("Logger already set : {0}")]
    Logger(#[from] log::SetLoggerError),

    /// The requested frame rate cannot drive a frame loop.
    #[error("Frame rate must be at least 1, got {0}")]
    InvalidFps(u32),
}
