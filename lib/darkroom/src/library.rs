use crate::DarkroomResult;
use image::RgbaImage;
use std::{fs, path::PathBuf};

/// Persists a rendered bitmap to durable user storage.
pub trait PhotoLibrary {
    fn save(&mut self, image: &RgbaImage) -> DarkroomResult<PathBuf>;
}

/// Saves rendered images as timestamped PNG files in one directory.
pub struct DiskLibrary {
    dir: PathBuf,
}

impl DiskLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PhotoLibrary for DiskLibrary {
    fn save(&mut self, image: &RgbaImage) -> DarkroomResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let name = format!(
            "phototint-{}.png",
            chrono::Local::now().format("%Y%m%d-%H%M%S%.3f")
        );
        let path = self.dir.join(name);

        image.save(&path)?;
        log::info!("Saved {}", path.display());

        Ok(path)
    }
}
