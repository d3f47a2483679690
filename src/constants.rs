use std::time::Duration;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);            // Autoplay delay between slides
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(1000); // Cross-fade length
pub const DEFAULT_SCALE: f32 = 1.4;                                           // Zoom applied to the outgoing slide

pub const WINDOW_WIDTH: i32 = 960;            // Initial viewer window width
pub const WINDOW_HEIGHT: i32 = 540;           // Initial viewer window height
pub const FPS: u32 = 60;                      // Frames per second

pub const ARROW_SIZE: f32 = 48.0;             // Square hit box of the prev/next arrows (pixels)
pub const INDICATOR_RADIUS: f32 = 6.0;        // Radius of an indicator dot (pixels)
pub const INDICATOR_SPACING: f32 = 22.0;      // Distance between indicator dot centers (pixels)
pub const INDICATOR_MARGIN: f32 = 24.0;       // Distance of the dot row from the bottom edge (pixels)
