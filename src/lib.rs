//! A carousel that cross-fades between panels while zooming the outgoing one.
//!
//! The widget is headless: it drives any [`RenderTarget`] and only moves when
//! the host calls [`FadeZoom::tick`]. The `viewer` feature adds a raylib
//! stage that shows a directory of photos.

pub mod autoplay;
pub mod cli;
pub mod config;
pub mod constants;
pub mod easing;
pub mod layout;
pub mod navigation;
pub mod render;
pub mod state;
pub mod texture_loader;
pub mod transition;
pub mod tween;
pub mod view;
pub mod widget;

#[cfg(feature = "viewer")]
pub mod slide;
#[cfg(feature = "viewer")]
pub mod stage;

pub use config::{ConfigError, FadeZoomConfig};
pub use easing::Easing;
pub use render::{MemoryTarget, PanelStyle, RenderTarget};
pub use state::{Lifecycle, TransitionState};
pub use widget::{FadeZoom, PointerEvent};
