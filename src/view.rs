//! What the carousel renders around its panels: slide regions, arrows and
//! indicator dots, with the attributes their click handlers read back.

use crate::config::FadeZoomConfig;
use crate::navigation::Direction;

pub const ROOT_ROLE_DESCRIPTION: &str = "carousel";
pub const SLIDE_ROLE_DESCRIPTION: &str = "slide";
pub const DIRECTION: &str = "ltr";

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub index: usize,
    pub role_description: &'static str,
    pub aria_hidden: bool,
    pub opacity: f32,
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowView {
    pub direction: Direction,
    pub disabled: bool,
}

impl ArrowView {
    pub fn data_type(&self) -> &'static str {
        self.direction.data_type()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorView {
    pub key: usize,
    pub active: bool,
}

impl IndicatorView {
    pub fn data_key(&self) -> String {
        self.key.to_string()
    }

    pub fn aria_label(&self) -> String {
        format!("Go to slide {}", self.key + 1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FadeZoomView {
    pub role_description: &'static str,
    pub dir: &'static str,
    pub wrapper_class: String,
    pub slides: Vec<SlideView>,
    pub previous_arrow: Option<ArrowView>,
    pub next_arrow: Option<ArrowView>,
    pub indicators: Option<Vec<IndicatorView>>,
}

impl FadeZoomView {
    pub fn build(config: &FadeZoomConfig, index: usize, count: usize) -> Self {
        let wrapper_class = match config.css_class.trim() {
            "" => "fadezoom-wrapper".to_string(),
            extra => format!("fadezoom-wrapper {extra}"),
        };

        let slides = (0..count)
            .map(|i| SlideView {
                index: i,
                role_description: SLIDE_ROLE_DESCRIPTION,
                aria_hidden: i != index,
                opacity: if i == index { 1.0 } else { 0.0 },
                z_index: if i == index { 1 } else { 0 },
            })
            .collect();

        let (previous_arrow, next_arrow) = if config.arrows {
            (
                Some(previous_arrow(config.infinite, index)),
                Some(next_arrow(config.infinite, index, count)),
            )
        } else {
            (None, None)
        };

        let indicators = config.indicators.then(|| {
            (0..count)
                .map(|key| IndicatorView { key, active: key == index })
                .collect()
        });

        Self {
            role_description: ROOT_ROLE_DESCRIPTION,
            dir: DIRECTION,
            wrapper_class,
            slides,
            previous_arrow,
            next_arrow,
            indicators,
        }
    }
}

pub fn previous_arrow(infinite: bool, index: usize) -> ArrowView {
    ArrowView {
        direction: Direction::Previous,
        disabled: !infinite && index == 0,
    }
}

pub fn next_arrow(infinite: bool, index: usize, count: usize) -> ArrowView {
    ArrowView {
        direction: Direction::Next,
        disabled: !infinite && index + 1 >= count,
    }
}
