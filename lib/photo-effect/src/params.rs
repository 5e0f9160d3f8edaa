use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The fixed parameter vocabulary filters may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ParamKey {
    Intensity = 0,
    Radius,
    Scale,
}

impl ParamKey {
    pub fn name(&self) -> &'static str {
        match self {
            ParamKey::Intensity => "intensity",
            ParamKey::Radius => "radius",
            ParamKey::Scale => "scale",
        }
    }
}

/// A sparse mapping from parameter key to value.
///
/// Keys a filter does not declare stay unset rather than being
/// zero-filled, so the filter's own default takes over.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FilterParams {
    intensity: Option<f32>,
    radius: Option<f32>,
    scale: Option<f32>,
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: ParamKey, value: f32) {
        match key {
            ParamKey::Intensity => self.intensity = Some(value),
            ParamKey::Radius => self.radius = Some(value),
            ParamKey::Scale => self.scale = Some(value),
        }
    }

    pub fn get(&self, key: ParamKey) -> Option<f32> {
        match key {
            ParamKey::Intensity => self.intensity,
            ParamKey::Radius => self.radius,
            ParamKey::Scale => self.scale,
        }
    }

    pub fn len(&self) -> usize {
        [self.intensity, self.radius, self.scale]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
