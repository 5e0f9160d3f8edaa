use crate::{FilterParams, ImageFilter, ParamKey};

/// Derives concrete parameter values from the single user-facing
/// intensity scalar.
///
/// Only keys the filter declares are populated:
/// - `intensity` maps through unchanged
/// - `radius` maps to `intensity * 200`
/// - `scale` maps to `intensity * 10`
///
/// `intensity` is expected to be in `[0.0, 1.0]`; clamping out-of-range
/// values is the caller's responsibility.
pub fn compute_parameters(filter: &dyn ImageFilter, intensity: f32) -> FilterParams {
    let mut params = FilterParams::new();

    for key in filter.input_keys() {
        match key {
            ParamKey::Intensity => params.set(ParamKey::Intensity, intensity),
            ParamKey::Radius => params.set(ParamKey::Radius, intensity * 200.0),
            ParamKey::Scale => params.set(ParamKey::Scale, intensity * 10.0),
        }
    }

    log::trace!("{}: {:?}", filter.name(), params);
    params
}
