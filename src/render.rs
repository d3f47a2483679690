//! The surface the widget draws through.
//!
//! The layout sizer and the transition engine only ever mutate panel styles
//! through [`RenderTarget`], so the whole widget can run headless against a
//! [`MemoryTarget`] or on screen against the raylib stage.

pub trait RenderTarget {
    /// Number of panels actually rendered.
    fn panel_count(&self) -> usize;

    fn set_track_width(&mut self, width: f32);

    /// Size a panel and shift it horizontally by `offset` pixels.
    fn set_geometry(&mut self, slide: usize, width: f32, offset: f32);

    fn set_opacity(&mut self, slide: usize, opacity: f32);

    fn set_scale(&mut self, slide: usize, scale: f32);

    /// Active panels are stacked in front and exposed to assistive tech;
    /// inactive ones are stacked behind and hidden.
    fn set_active(&mut self, slide: usize, active: bool);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelStyle {
    pub width: f32,
    pub offset: f32,
    pub opacity: f32,
    pub scale: f32,
    pub active: bool,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            width: 0.0,
            offset: 0.0,
            opacity: 0.0,
            scale: 1.0,
            active: false,
        }
    }
}

/// Headless render target that just records the last style of every panel.
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    pub track_width: f32,
    panels: Vec<PanelStyle>,
}

impl MemoryTarget {
    pub fn new(panel_count: usize) -> Self {
        Self {
            track_width: 0.0,
            panels: vec![PanelStyle::default(); panel_count],
        }
    }

    pub fn panel(&self, slide: usize) -> Option<&PanelStyle> {
        self.panels.get(slide)
    }

    pub fn panels(&self) -> &[PanelStyle] {
        &self.panels
    }
}

impl RenderTarget for MemoryTarget {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn set_track_width(&mut self, width: f32) {
        self.track_width = width;
    }

    fn set_geometry(&mut self, slide: usize, width: f32, offset: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.width = width;
            panel.offset = offset;
        }
    }

    fn set_opacity(&mut self, slide: usize, opacity: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.opacity = opacity;
        }
    }

    fn set_scale(&mut self, slide: usize, scale: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.scale = scale;
        }
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.active = active;
        }
    }
}
