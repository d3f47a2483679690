use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rand::Rng;
use rand::seq::SliceRandom;

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

pub fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => matches!(
            ext.to_lowercase().as_str(),
            "png" | "jpg" | "jpeg" | "bmp" | "gif"
        ),
        None => false,
    }
}

pub fn shuffle_paths<R: Rng + ?Sized>(paths: &mut [PathBuf], rng: &mut R) {
    paths.shuffle(rng);
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
#[cfg(feature = "viewer")]
pub fn load_texture_with_exif_rotation(
    rl: &mut raylib::prelude::RaylibHandle,
    thread: &raylib::prelude::RaylibThread,
    image_path: &Path,
) -> Result<raylib::prelude::Texture2D> {
    use exif::{In, Reader, Tag, Value};
    use raylib::prelude::*;
    use std::io::Cursor;
    use tracing::{debug, warn};

    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let mut orientation = 1;

    // EXIF is only read reliably from JPEG containers
    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(value) = values.first() {
                            orientation = *value;
                        }
                    }
                }
            }
            Err(e) => {
                warn!(path = %image_path.display(), error = %e, "could not read EXIF data");
            }
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {}: {e}", image_path.display()))?;

    // 3 = 180 deg, 6 = 90 deg clockwise, 8 = 90 deg counter-clockwise.
    // Mirrored orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 180 deg rotation");
        }
        6 => {
            image.rotate_cw();
            debug!(path = %image_path.display(), "applied 90 deg CW rotation");
        }
        8 => {
            image.rotate_ccw();
            debug!(path = %image_path.display(), "applied 90 deg CCW rotation");
        }
        _ => {}
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {}: {e}", image_path.display()))?;

    // Unload the CPU-side copy
    drop(image);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn only_images_are_listed_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.JPG", "a.png", "notes.txt", "c.gif", "noext"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("d.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, vec!["a.png", "b.JPG", "c.gif"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"").unwrap();
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(err.to_string().contains("No image files"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(load_sorted_image_paths(Path::new("/nonexistent/photos")).is_err());
    }

    #[test]
    fn shuffling_keeps_every_path() {
        let mut paths: Vec<PathBuf> = (0..10).map(|i| PathBuf::from(format!("{i}.png"))).collect();
        let original = paths.clone();
        shuffle_paths(&mut paths, &mut StdRng::seed_from_u64(7));
        let mut sorted = paths.clone();
        sorted.sort();
        let mut expected = original;
        expected.sort();
        assert_eq!(sorted, expected);
    }
}
