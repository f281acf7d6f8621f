use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("Invalid thumbnail target size: {0}px")]
    InvalidTarget(i32),

    #[error("Duplicate photo id {0} in library")]
    DuplicatePhotoId(i64),

    #[error("No photo with id {0}")]
    UnknownPhoto(i64),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
