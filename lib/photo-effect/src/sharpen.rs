use crate::{FilterParams, ImageFilter, ParamKey};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct UnsharpMaskFilter {
    #[derivative(Default(value = "2.5"))]
    radius: f32,

    #[derivative(Default(value = "0.5"))]
    intensity: f32,
}

impl UnsharpMaskFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for UnsharpMaskFilter {
    fn name(&self) -> &'static str {
        "Unsharp Mask"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Radius, ParamKey::Intensity]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let radius = params.get(ParamKey::Radius).unwrap_or(self.radius);
        let amount = params
            .get(ParamKey::Intensity)
            .unwrap_or(self.intensity)
            .max(0.0);

        if radius < 0.05 || amount == 0.0 {
            return Some(image.clone());
        }

        // Sigma beyond ~100 adds no visible sharpening detail, only cost.
        let sigma = radius.min(100.0);
        let blurred = imageproc::filter::gaussian_blur_f32(image, sigma);

        let mut result = image.clone();
        for (pixel, blurred_pixel) in result.pixels_mut().zip(blurred.pixels()) {
            for channel in 0..3 {
                let original = pixel[channel] as f32;
                let soft = blurred_pixel[channel] as f32;
                pixel[channel] = (original + (original - soft) * amount).clamp(0.0, 255.0) as u8;
            }
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount_is_a_passthrough() {
        let img = RgbaImage::from_fn(8, 8, |x, _| image::Rgba([(x * 30) as u8, 0, 0, 255]));
        let mut params = FilterParams::new();
        params.set(ParamKey::Radius, 10.0);
        params.set(ParamKey::Intensity, 0.0);

        let out = UnsharpMaskFilter::new().apply(&params, &img).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_flat_image_is_unchanged() {
        // No detail to amplify, so sharpening is an identity.
        let img = RgbaImage::from_pixel(8, 8, image::Rgba([120, 130, 140, 255]));
        let mut params = FilterParams::new();
        params.set(ParamKey::Radius, 4.0);
        params.set(ParamKey::Intensity, 1.0);

        let out = UnsharpMaskFilter::new().apply(&params, &img).unwrap();
        assert_eq!(out, img);
    }

    #[test]
    fn test_sharpening_increases_edge_contrast() {
        let img = RgbaImage::from_fn(16, 16, |x, _| {
            if x < 8 {
                image::Rgba([64, 64, 64, 255])
            } else {
                image::Rgba([192, 192, 192, 255])
            }
        });
        let mut params = FilterParams::new();
        params.set(ParamKey::Radius, 2.0);
        params.set(ParamKey::Intensity, 1.0);

        let out = UnsharpMaskFilter::new().apply(&params, &img).unwrap();
        // Dark side of the edge gets darker, bright side brighter.
        assert!(out.get_pixel(7, 8)[0] <= img.get_pixel(7, 8)[0]);
        assert!(out.get_pixel(8, 8)[0] >= img.get_pixel(8, 8)[0]);
    }
}
