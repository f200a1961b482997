use crate::models::AlbumId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("album title must not be blank")]
    BlankTitle,

    #[error("album {0} not found")]
    AlbumNotFound(AlbumId),

    #[error("there are no photos to print")]
    NothingToPrint,

    #[error("platform service failed: {0}")]
    Platform(#[from] std::io::Error),
}
