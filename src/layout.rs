use tracing::debug;

use crate::render::RenderTarget;

/// Places every panel edge-to-edge at the container width.
///
/// Panels sit side by side in the track, so shifting panel `i` left by
/// `i * width` stacks all of them on top of each other in the viewport.
#[derive(Debug, Default)]
pub struct Sizer {
    observing: bool,
    width: Option<f32>,
}

impl Sizer {
    pub fn observe(&mut self) {
        self.observing = true;
    }

    pub fn unobserve(&mut self) {
        self.observing = false;
    }

    /// Last width applied to the track.
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// Size-change notification. Ignored while detached.
    pub fn on_resize<T: RenderTarget>(&mut self, width: f32, target: &mut T) {
        if self.observing {
            self.apply(width, target);
        }
    }

    pub fn apply<T: RenderTarget>(&mut self, width: f32, target: &mut T) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let count = target.panel_count();
        target.set_track_width(width * count as f32);
        for slide in 0..count {
            target.set_geometry(slide, width, slide as f32 * -width);
        }
        if self.width != Some(width) {
            debug!(width, panels = count, "layout applied");
        }
        self.width = Some(width);
    }
}
