use crate::{FilterParams, ImageFilter, ParamKey};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;
use photon_rs::conv;

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GaussianBlurFilter {
    #[derivative(Default(value = "10.0"))]
    radius: f32,
}

impl GaussianBlurFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for GaussianBlurFilter {
    fn name(&self) -> &'static str {
        "Gaussian Blur"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Radius]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let radius = params.get(ParamKey::Radius).unwrap_or(self.radius).round() as i32;
        if radius < 1 {
            return Some(image.clone());
        }

        let (width, height) = (image.width(), image.height());
        let mut photon_img = photon_rs::PhotonImage::new(image.to_vec(), width, height);
        conv::gaussian_blur(&mut photon_img, radius);
        RgbaImage::from_raw(width, height, photon_img.get_raw_pixels())
    }
}
