use image::{ImageReader, RgbaImage};
use std::path::PathBuf;

/// Supplies a source image when the user completes a picking interaction.
///
/// Emits at most one image per picking session; `None` means the pick was
/// cancelled and the current state must stay unchanged.
pub trait ImageSource {
    fn pick(&mut self) -> Option<RgbaImage>;
}

/// Picks an image from a file path.
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileImageSource {
    fn pick(&mut self) -> Option<RgbaImage> {
        // An unreadable file behaves like a cancelled pick.
        let decoded = ImageReader::open(&self.path)
            .map_err(image::ImageError::IoError)
            .and_then(|reader| reader.decode());

        match decoded {
            Ok(img) => Some(img.to_rgba8()),
            Err(err) => {
                log::debug!("Failed to load {}: {err}", self.path.display());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_behaves_like_cancel() {
        let mut source = FileImageSource::new("/nonexistent/picture.png");
        assert!(source.pick().is_none());
    }
}
