use crate::{
    ImageFilter, PhotoEffectError, PhotoEffectResult,
    blur::GaussianBlurFilter,
    sharpen::UnsharpMaskFilter,
    stylized::{CrystallizeFilter, EdgesFilter, PixellateFilter},
    tone::{SepiaToneFilter, VignetteFilter},
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The fixed set of filters offered for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum FilterKind {
    Crystallize = 0,
    Edges,
    GaussianBlur,
    Pixellate,
    SepiaTone,
    UnsharpMask,
    Vignette,
}

impl Default for FilterKind {
    fn default() -> Self {
        FilterKind::SepiaTone
    }
}

impl FilterKind {
    pub const ALL: [FilterKind; 7] = [
        FilterKind::Crystallize,
        FilterKind::Edges,
        FilterKind::GaussianBlur,
        FilterKind::Pixellate,
        FilterKind::SepiaTone,
        FilterKind::UnsharpMask,
        FilterKind::Vignette,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FilterKind::Crystallize => "Crystallize",
            FilterKind::Edges => "Edges",
            FilterKind::GaussianBlur => "Gaussian Blur",
            FilterKind::Pixellate => "Pixellate",
            FilterKind::SepiaTone => "Sepia Tone",
            FilterKind::UnsharpMask => "Unsharp Mask",
            FilterKind::Vignette => "Vignette",
        }
    }

    /// Looks a filter up by name, ignoring case and separators, so
    /// "Sepia Tone", "sepia-tone" and "sepia_tone" all match.
    pub fn from_name(name: &str) -> Option<FilterKind> {
        let wanted = normalize(name);
        FilterKind::ALL
            .into_iter()
            .find(|kind| normalize(kind.name()) == wanted)
    }

    pub fn parse(name: &str) -> PhotoEffectResult<FilterKind> {
        Self::from_name(name).ok_or_else(|| PhotoEffectError::UnknownFilter(name.to_string()))
    }

    pub fn create(&self) -> Box<dyn ImageFilter> {
        match self {
            FilterKind::Crystallize => Box::new(CrystallizeFilter::new()),
            FilterKind::Edges => Box::new(EdgesFilter::new()),
            FilterKind::GaussianBlur => Box::new(GaussianBlurFilter::new()),
            FilterKind::Pixellate => Box::new(PixellateFilter::new()),
            FilterKind::SepiaTone => Box::new(SepiaToneFilter::new()),
            FilterKind::UnsharpMask => Box::new(UnsharpMaskFilter::new()),
            FilterKind::Vignette => Box::new(VignetteFilter::new()),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
