use crate::{FilterParams, ImageFilter, ParamKey};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbaImage;
use photon_rs::{PhotonImage, conv, effects};

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct EdgesFilter {
    #[derivative(Default(value = "1.0"))]
    intensity: f32,
}

impl EdgesFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for EdgesFilter {
    fn name(&self) -> &'static str {
        "Edges"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Intensity]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let gain = params
            .get(ParamKey::Intensity)
            .unwrap_or(self.intensity)
            .max(0.0);

        let (width, height) = (image.width(), image.height());
        let mut photon_img = PhotonImage::new(image.to_vec(), width, height);
        conv::edge_detection(&mut photon_img);
        let mut pixels = photon_img.get_raw_pixels();

        // Intensity scales edge response; 0.0 fades to black.
        if (gain - 1.0).abs() > f32::EPSILON {
            for chunk in pixels.chunks_mut(4) {
                chunk[0] = (chunk[0] as f32 * gain).clamp(0.0, 255.0) as u8;
                chunk[1] = (chunk[1] as f32 * gain).clamp(0.0, 255.0) as u8;
                chunk[2] = (chunk[2] as f32 * gain).clamp(0.0, 255.0) as u8;
            }
        }

        RgbaImage::from_raw(width, height, pixels)
    }
}

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct PixellateFilter {
    #[derivative(Default(value = "8.0"))]
    scale: f32,
}

impl PixellateFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for PixellateFilter {
    fn name(&self) -> &'static str {
        "Pixellate"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Scale]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let block_size = params
            .get(ParamKey::Scale)
            .unwrap_or(self.scale)
            .round()
            .max(1.0) as i32;

        let (width, height) = (image.width(), image.height());
        let mut photon_img = PhotonImage::new(image.to_vec(), width, height);
        effects::pixelize(&mut photon_img, block_size);
        RgbaImage::from_raw(width, height, photon_img.get_raw_pixels())
    }
}

#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct CrystallizeFilter {
    #[derivative(Default(value = "20.0"))]
    radius: f32,
}

impl CrystallizeFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageFilter for CrystallizeFilter {
    fn name(&self) -> &'static str {
        "Crystallize"
    }

    fn input_keys(&self) -> &'static [ParamKey] {
        &[ParamKey::Radius]
    }

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage> {
        let radius = params.get(ParamKey::Radius).unwrap_or(self.radius);
        // Oil-painting cost grows quadratically with the neighborhood;
        // keep the cell size bounded.
        let cell = (radius * 0.1).round().clamp(1.0, 20.0) as i32;

        let (width, height) = (image.width(), image.height());
        let mut photon_img = PhotonImage::new(image.to_vec(), width, height);
        effects::oil(&mut photon_img, cell, 30.0);
        RgbaImage::from_raw(width, height, photon_img.get_raw_pixels())
    }
}
