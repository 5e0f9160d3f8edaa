pub mod library;
pub mod render;
pub mod session;
pub mod source;

pub use library::{DiskLibrary, PhotoLibrary};
pub use render::{EffectRenderer, RenderBackend};
pub use session::EditorSession;
pub use source::{FileImageSource, ImageSource};

pub type DarkroomResult<T> = Result<T, DarkroomError>;

#[derive(thiserror::Error, Debug)]
pub enum DarkroomError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
