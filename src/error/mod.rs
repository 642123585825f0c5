mod archive;
mod discovery;
mod fs;
mod steps;

pub use archive::ArchiveError;
pub use discovery::DiscoveryError;
pub use fs::FsError;
pub use steps::StepError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error(transparent)]
    Steps(#[from] StepError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),
}

pub type Result<T> = std::result::Result<T, Error>;
