// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] comment_ripper_engine::error::RipperError),

    #[error("{0} argument must be set")]
    MissingArgument(&'static str),

    #[error("{0} file(s) failed")]
    Failures(usize),
}

pub type Result<T> = std::result::Result<T, AppError>;
