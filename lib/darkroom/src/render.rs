use image::RgbaImage;
use photo_effect::{FilterParams, ImageFilter};

/// Converts a parameterized filter plus a source image into a concrete
/// bitmap. `None` is a valid, non-error outcome; callers keep whatever
/// output they already have.
pub trait RenderBackend {
    fn render(
        &self,
        filter: &dyn ImageFilter,
        params: &FilterParams,
        source: &RgbaImage,
    ) -> Option<RgbaImage>;
}

/// Default backend: a thin pass-through to the filter itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectRenderer;

impl EffectRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for EffectRenderer {
    fn render(
        &self,
        filter: &dyn ImageFilter,
        params: &FilterParams,
        source: &RgbaImage,
    ) -> Option<RgbaImage> {
        filter.apply(params, source)
    }
}
