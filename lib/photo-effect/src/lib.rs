pub mod adapter;
pub mod blur;
pub mod catalog;
pub mod params;
pub mod sharpen;
pub mod stylized;
pub mod tone;

use image::RgbaImage;

pub use adapter::compute_parameters;
pub use catalog::FilterKind;
pub use params::{FilterParams, ParamKey};

pub type PhotoEffectResult<T> = Result<T, PhotoEffectError>;

#[derive(thiserror::Error, Debug)]
pub enum PhotoEffectError {
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),
}

/// An image-transform capability with a declared subset of recognized
/// parameter keys.
///
/// `input_keys` is the filter's fixed declaration; the parameter adapter
/// only populates keys listed there. A key the caller leaves unset falls
/// back to the filter's own default value.
///
/// `apply` returning `None` is a valid, non-error outcome (e.g. a buffer
/// rebuild failed); callers keep whatever output they already have.
pub trait ImageFilter {
    fn name(&self) -> &'static str;

    fn input_keys(&self) -> &'static [ParamKey];

    fn apply(&self, params: &FilterParams, image: &RgbaImage) -> Option<RgbaImage>;
}
