use raylib::prelude::*;

use crate::constants::*;
use crate::navigation::Direction;
use crate::render::RenderTarget;
use crate::slide::Panel;
use crate::view::{ArrowView, FadeZoomView};

/// What a click landed on, carrying the attribute its handler resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Arrow(&'static str),
    Indicator(String),
}

/// Raylib render target: the photo panels plus arrow and dot chrome.
pub struct Stage {
    panels: Vec<Panel>,
    track_width: f32,
    height: f32,
}

impl Stage {
    pub fn new(textures: Vec<Texture2D>, height: f32) -> Self {
        Self {
            panels: textures.into_iter().map(Panel::new).collect(),
            track_width: 0.0,
            height,
        }
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn width(&self) -> f32 {
        if self.panels.is_empty() {
            0.0
        } else {
            self.track_width / self.panels.len() as f32
        }
    }

    fn previous_arrow_rect(&self) -> Rectangle {
        Rectangle::new(8.0, (self.height - ARROW_SIZE) * 0.5, ARROW_SIZE, ARROW_SIZE)
    }

    fn next_arrow_rect(&self) -> Rectangle {
        Rectangle::new(
            self.width() - ARROW_SIZE - 8.0,
            (self.height - ARROW_SIZE) * 0.5,
            ARROW_SIZE,
            ARROW_SIZE,
        )
    }

    fn indicator_center(&self, key: usize, count: usize) -> Vector2 {
        let row_width = count.saturating_sub(1) as f32 * INDICATOR_SPACING;
        Vector2::new(
            (self.width() - row_width) * 0.5 + key as f32 * INDICATOR_SPACING,
            self.height - INDICATOR_MARGIN,
        )
    }

    pub fn hit_test(&self, view: &FadeZoomView, point: Vector2) -> Option<Hit> {
        let arrows = [
            (&view.previous_arrow, self.previous_arrow_rect()),
            (&view.next_arrow, self.next_arrow_rect()),
        ];
        for (arrow, rect) in arrows {
            if let Some(arrow) = arrow.as_ref().filter(|_| contains(rect, point)) {
                return Some(Hit::Arrow(arrow.data_type()));
            }
        }

        let dots = view.indicators.as_deref().unwrap_or_default();
        dots.iter().find_map(|dot| {
            let center = self.indicator_center(dot.key, dots.len());
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            // Generous hit radius, dots are small
            let reach = INDICATOR_RADIUS * 2.0;
            (dx * dx + dy * dy <= reach * reach).then(|| Hit::Indicator(dot.data_key()))
        })
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, view: &FadeZoomView) {
        // Inactive panels first so the active one stacks on top
        for (slot, panel) in self.panels.iter().enumerate().filter(|(_, p)| !p.style.active) {
            panel.draw(d, slot, self.height);
        }
        for (slot, panel) in self.panels.iter().enumerate().filter(|(_, p)| p.style.active) {
            panel.draw(d, slot, self.height);
        }

        if let Some(arrow) = &view.previous_arrow {
            draw_arrow(d, self.previous_arrow_rect(), arrow);
        }
        if let Some(arrow) = &view.next_arrow {
            draw_arrow(d, self.next_arrow_rect(), arrow);
        }

        if let Some(dots) = &view.indicators {
            for dot in dots {
                let center = self.indicator_center(dot.key, dots.len());
                if dot.active {
                    d.draw_circle_v(center, INDICATOR_RADIUS, Color::WHITE);
                } else {
                    d.draw_circle_v(center, INDICATOR_RADIUS, Color::new(255, 255, 255, 90));
                }
            }
        }
    }
}

fn contains(rect: Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

fn draw_arrow(d: &mut RaylibDrawHandle, rect: Rectangle, arrow: &ArrowView) {
    let alpha = if arrow.disabled { 60 } else { 160 };
    d.draw_rectangle_rec(rect, Color::new(0, 0, 0, alpha));

    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let h = rect.height * 0.25;
    let color = Color::new(255, 255, 255, if arrow.disabled { 90 } else { 230 });
    // Vertices go counter-clockwise
    match arrow.direction {
        Direction::Previous => d.draw_triangle(
            Vector2::new(cx + h * 0.5, cy - h),
            Vector2::new(cx - h * 0.5, cy),
            Vector2::new(cx + h * 0.5, cy + h),
            color,
        ),
        Direction::Next => d.draw_triangle(
            Vector2::new(cx - h * 0.5, cy - h),
            Vector2::new(cx - h * 0.5, cy + h),
            Vector2::new(cx + h * 0.5, cy),
            color,
        ),
    }
}

impl RenderTarget for Stage {
    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn set_track_width(&mut self, width: f32) {
        self.track_width = width;
    }

    fn set_geometry(&mut self, slide: usize, width: f32, offset: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.style.width = width;
            panel.style.offset = offset;
        }
    }

    fn set_opacity(&mut self, slide: usize, opacity: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.style.opacity = opacity;
        }
    }

    fn set_scale(&mut self, slide: usize, scale: f32) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.style.scale = scale;
        }
    }

    fn set_active(&mut self, slide: usize, active: bool) {
        if let Some(panel) = self.panels.get_mut(slide) {
            panel.style.active = active;
        }
    }
}
