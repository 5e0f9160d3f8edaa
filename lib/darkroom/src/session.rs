use crate::{DarkroomResult, EffectRenderer, ImageSource, PhotoLibrary, RenderBackend};
use image::RgbaImage;
use photo_effect::{FilterKind, ImageFilter, compute_parameters};
use std::path::PathBuf;

/// The mutable editing state: current filter, intensity, source image and
/// the last rendered output, with the render backend injected.
///
/// Every change to the filter, the intensity or the source re-renders
/// synchronously, so a present rendered image always reflects the current
/// selection. When there is nothing to render yet, or the backend
/// produces no output, the previous output is kept; neither case is an
/// error.
pub struct EditorSession {
    filter: Box<dyn ImageFilter>,
    intensity: f32,
    source: Option<RgbaImage>,
    rendered: Option<RgbaImage>,
    renderer: Box<dyn RenderBackend>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_renderer(Box::new(EffectRenderer::new()))
    }

    pub fn with_renderer(renderer: Box<dyn RenderBackend>) -> Self {
        Self {
            filter: FilterKind::default().create(),
            intensity: 0.5,
            source: None,
            rendered: None,
            renderer,
        }
    }

    pub fn filter_name(&self) -> &'static str {
        self.filter.name()
    }

    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    pub fn source(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    /// The output of the last successful render, if any.
    pub fn rendered(&self) -> Option<&RgbaImage> {
        self.rendered.as_ref()
    }

    /// Sets the source image and renders it under the current selection.
    pub fn load_image(&mut self, image: RgbaImage) {
        self.source = Some(image);
        self.refresh();
    }

    /// Runs one picking interaction. A cancelled pick leaves the current
    /// state unchanged.
    pub fn pick_image(&mut self, source: &mut dyn ImageSource) {
        if let Some(image) = source.pick() {
            self.load_image(image);
        }
    }

    /// Replaces the current filter and re-renders the existing source,
    /// if any.
    pub fn set_filter(&mut self, filter: Box<dyn ImageFilter>) {
        log::debug!("Filter changed to {}", filter.name());
        self.filter = filter;
        self.refresh();
    }

    pub fn select(&mut self, kind: FilterKind) {
        self.set_filter(kind.create());
    }

    /// Updates the intensity scalar and re-renders. Values are used
    /// as-is; callers clamp into `[0.0, 1.0]`.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
        self.refresh();
    }

    /// Persists the last rendered image. With nothing rendered yet this
    /// is a no-op that never touches the library.
    pub fn save_to(&self, library: &mut dyn PhotoLibrary) -> DarkroomResult<Option<PathBuf>> {
        match &self.rendered {
            Some(image) => library.save(image).map(Some),
            None => Ok(None),
        }
    }

    fn refresh(&mut self) {
        let Some(source) = &self.source else {
            return;
        };

        let params = compute_parameters(self.filter.as_ref(), self.intensity);
        match self.renderer.render(self.filter.as_ref(), &params, source) {
            Some(image) => self.rendered = Some(image),
            None => log::debug!(
                "{} produced no output; keeping previous render",
                self.filter.name()
            ),
        }
    }
}
