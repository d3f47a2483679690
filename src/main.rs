use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fadezoom::cli::Cli;
use fadezoom::constants::*;
use fadezoom::stage::{Hit, Stage};
use fadezoom::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation, shuffle_paths};
use fadezoom::{FadeZoom, PointerEvent};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;

    // --- Load Slides ---
    let mut image_paths = load_sorted_image_paths(&cli.image_directory)?;
    if cli.shuffle {
        shuffle_paths(&mut image_paths, &mut rand::rng());
    }
    info!(path = %cli.image_directory.display(), images = image_paths.len(), "input directory scanned");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("FadeZoom")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut textures = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping image"),
        }
    }
    if textures.is_empty() {
        bail!("No slides were loaded from {}", cli.image_directory.display());
    }
    info!(slides = textures.len(), "slides loaded");

    let height = rl.get_screen_height() as f32;
    let mut carousel = FadeZoom::new(config, Stage::new(textures, height))
        .with_on_change(|from, to| info!(from, to, "slide changed"));
    carousel.start(rl.get_screen_width() as f32);

    let mut hovered = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::try_from_secs_f32(rl.get_frame_time()).unwrap_or_default();

        if rl.is_window_resized() {
            carousel.target_mut().set_height(rl.get_screen_height() as f32);
            carousel.resize(rl.get_screen_width() as f32);
        }

        // Pointer hover over the whole window
        let inside = rl.is_cursor_on_screen();
        let delta = rl.get_mouse_delta();
        if inside != hovered {
            hovered = inside;
            carousel.pointer(if inside { PointerEvent::Enter } else { PointerEvent::Leave });
        } else if inside && (delta.x != 0.0 || delta.y != 0.0) {
            carousel.pointer(PointerEvent::Over);
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let view = carousel.view();
            match carousel.target().hit_test(&view, rl.get_mouse_position()) {
                Some(Hit::Arrow(data_type)) => {
                    carousel.click_arrow(Some(data_type));
                }
                Some(Hit::Indicator(data_key)) => {
                    carousel.click_indicator(Some(&data_key));
                }
                None => {}
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.next();
        }

        carousel.tick(dt);

        let view = carousel.view();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.target().draw(&mut d, &view);
    }

    carousel.teardown();
    Ok(())
}
