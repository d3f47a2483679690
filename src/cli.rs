use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{ConfigError, FadeZoomConfig};
use crate::easing::Easing;

/// Cross-fading, zooming photo carousel.
#[derive(Debug, Parser)]
#[command(name = "fadezoom", version, about)]
pub struct Cli {
    /// Directory holding the images to show
    pub image_directory: PathBuf,

    /// TOML file with carousel settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Autoplay delay in milliseconds
    #[arg(long)]
    pub duration: Option<u64>,

    /// Cross-fade length in milliseconds
    #[arg(long)]
    pub transition_duration: Option<u64>,

    /// Zoom reached by the outgoing slide
    #[arg(long)]
    pub scale: Option<f32>,

    #[arg(long, value_enum)]
    pub easing: Option<Easing>,

    /// Slide to start on
    #[arg(long)]
    pub default_index: Option<usize>,

    #[arg(long)]
    pub no_autoplay: bool,

    /// Stop at the first and last slide instead of wrapping
    #[arg(long)]
    pub no_infinite: bool,

    #[arg(long)]
    pub no_pause_on_hover: bool,

    #[arg(long)]
    pub no_arrows: bool,

    /// Show one dot per slide under the carousel
    #[arg(long)]
    pub indicators: bool,

    /// Show the images in random order
    #[arg(long)]
    pub shuffle: bool,
}

impl Cli {
    /// Defaults, then the config file, then flags.
    pub fn config(&self) -> Result<FadeZoomConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => FadeZoomConfig::load(path)?,
            None => FadeZoomConfig::default(),
        };

        if let Some(ms) = self.duration {
            config.duration = Duration::from_millis(ms);
        }
        if let Some(ms) = self.transition_duration {
            config.transition_duration = Duration::from_millis(ms);
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(easing) = self.easing {
            config.easing = easing;
        }
        if self.default_index.is_some() {
            config.default_index = self.default_index;
        }
        config.autoplay &= !self.no_autoplay;
        config.infinite &= !self.no_infinite;
        config.pause_on_hover &= !self.no_pause_on_hover;
        config.arrows &= !self.no_arrows;
        config.indicators |= self.indicators;

        config.validate()?;
        Ok(config)
    }
}
