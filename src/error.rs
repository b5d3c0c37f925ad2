use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueCssError {
    #[error("Log file error: {0}")]
    IO(#[from] std::io::Error),

    #[error("A logger is already installed")]
    LoggerInstalled(#[from] log::SetLoggerError),

    #[error(transparent)]
    Cue(#[from] cuecss::CueError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, CueCssError>;
