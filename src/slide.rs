use raylib::prelude::*;

use crate::render::PanelStyle;

/// One photo of the carousel together with the style the widget last gave it.
pub struct Panel {
    image: Texture2D,
    pub style: PanelStyle,
}

impl Panel {
    pub fn new(image: Texture2D) -> Self {
        Self {
            image,
            style: PanelStyle::default(),
        }
    }

    /// Scale that fits the whole image inside a `width` x `height` box.
    pub fn fit_scale(&self, width: f32, height: f32) -> f32 {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        if tex_width <= 0.0 || tex_height <= 0.0 {
            return 0.0;
        }
        (width / tex_width).min(height / tex_height)
    }

    /// Draw in track slot `slot`. The panel's offset pulls it back over slot 0.
    pub fn draw(&self, d: &mut RaylibDrawHandle, slot: usize, height: f32) {
        if self.style.opacity <= 0.0 || self.style.width <= 0.0 {
            return;
        }
        let width = self.style.width;
        let left = slot as f32 * width + self.style.offset;

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = self.fit_scale(width, height) * self.style.scale;
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Zoom around the panel center
        let center = Vector2::new(left + width * 0.5, height * 0.5);
        let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);
        let alpha = (self.style.opacity.clamp(0.0, 1.0) * 255.0).round() as u8;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(center.x, center.y, scaled_width, scaled_height),
            origin,
            0.0,
            Color::new(255, 255, 255, alpha),
        );
    }
}
