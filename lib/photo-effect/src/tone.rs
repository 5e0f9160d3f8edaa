use crate::{FilterParams, ImageFilter, ParamKey};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;
use photon_rs::{PhotonImage, monochrome};

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct SepiaToneFilter {
    #[derivative(Default(value = "1.0"))]
    intensity: f32,
}

impl SepiaToneFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for SepiaToneFilter {
    fn name(&self) -> &'static str {
        "Sepia Tone"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Intensity]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let intensity = params.get(ParamKey::Intensity).unwrap_or(self.intensity);

        let (width, height) = (image.width(), image.height());
        let mut photon_img = PhotonImage::new(image.to_vec(), width, height);
        monochrome::sepia(&mut photon_img);
        let sepia_pixels = photon_img.get_raw_pixels();

        // If intensity is not 1.0, blend with original
        if intensity < 1.0 {
            let original_pixels = image.to_vec();
            let mut blended_pixels = Vec::with_capacity(sepia_pixels.len());

            for (original, sepia) in original_pixels.chunks(4).zip(sepia_pixels.chunks(4)) {
                blended_pixels.push(
                    (original[0] as f32 * (1.0 - intensity) + sepia[0] as f32 * intensity) as u8,
                );
                blended_pixels.push(
                    (original[1] as f32 * (1.0 - intensity) + sepia[1] as f32 * intensity) as u8,
                );
                blended_pixels.push(
                    (original[2] as f32 * (1.0 - intensity) + sepia[2] as f32 * intensity) as u8,
                );
                blended_pixels.push(original[3]); // Keep alpha
            }

            RgbaImage::from_raw(width, height, blended_pixels)
        } else {
            RgbaImage::from_raw(width, height, sepia_pixels)
        }
    }
}

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct VignetteFilter {
    #[derivative(Default(value = "0.0"))]
    intensity: f32,

    /// Falloff band width in pixels, measured inward from the corners.
    #[derivative(Default(value = "1.0"))]
    radius: f32,
}

impl VignetteFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for VignetteFilter {
    fn name(&self) -> &'static str {
        "Vignette"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Intensity, ParamKey::Radius]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let strength = params
            .get(ParamKey::Intensity)
            .unwrap_or(self.intensity)
            .clamp(0.0, 1.0);
        let reach = params.get(ParamKey::Radius).unwrap_or(self.radius).max(1.0);

        let width = image.width();
        let height = image.height();
        let center_x = width as f32 / 2.0;
        let center_y = height as f32 / 2.0;
        let max_distance = (center_x * center_x + center_y * center_y).sqrt();
        let band_start = (max_distance - reach).max(0.0);

        let mut pixels = image.to_vec();

        for (i, chunk) in pixels.chunks_mut(4).enumerate() {
            // Calculate position from pixel index
            let x = (i % width as usize) as f32;
            let y = (i / width as usize) as f32;

            let dx = x - center_x;
            let dy = y - center_y;
            let distance = (dx * dx + dy * dy).sqrt();

            let t = ((distance - band_start) / reach).clamp(0.0, 1.0);
            let vignette_factor = 1.0 - strength * t;

            // Apply vignette to RGB channels
            chunk[0] = (chunk[0] as f32 * vignette_factor) as u8;
            chunk[1] = (chunk[1] as f32 * vignette_factor) as u8;
            chunk[2] = (chunk[2] as f32 * vignette_factor) as u8;
        }

        RgbaImage::from_raw(width, height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 8) as u8, (y * 8) as u8, 128, 255])
        })
    }

    #[test]
    fn test_sepia_zero_intensity_keeps_original() {
        let img = gradient(16, 16);
        let mut params = FilterParams::new();
        params.set(ParamKey::Intensity, 0.0);

        let out = SepiaToneFilter::new().apply(&params, &img).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_sepia_full_intensity_changes_pixels() {
        let img = gradient(16, 16);
        let mut params = FilterParams::new();
        params.set(ParamKey::Intensity, 1.0);

        let out = SepiaToneFilter::new().apply(&params, &img).unwrap();
        assert_eq!(out.dimensions(), img.dimensions());
        assert_ne!(out, img);
    }

    #[test]
    fn test_vignette_keeps_center_pixel() {
        let img = gradient(32, 32);
        let mut params = FilterParams::new();
        params.set(ParamKey::Intensity, 1.0);
        params.set(ParamKey::Radius, 10.0);

        let out = VignetteFilter::new().apply(&params, &img).unwrap();
        assert_eq!(out.get_pixel(16, 16), img.get_pixel(16, 16));
    }

    #[test]
    fn test_vignette_darkens_corner() {
        let img = gradient(32, 32);
        let mut params = FilterParams::new();
        params.set(ParamKey::Intensity, 1.0);
        params.set(ParamKey::Radius, 20.0);

        let out = VignetteFilter::new().apply(&params, &img).unwrap();
        let corner = out.get_pixel(31, 31);
        let original = img.get_pixel(31, 31);
        assert!(corner[0] < original[0] || corner[1] < original[1]);
    }
}
