//! Image file loading into the boundary `ImageForm` representation.
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::raster::ImageForm;

/// Decode a single image file.
pub fn load_image(path: &Path) -> Result<ImageForm> {
    let image = image::open(path)?;
    debug!(
        "Loaded {:?}: {}x{}",
        path,
        image.width(),
        image.height()
    );
    Ok(ImageForm::Dynamic(image))
}

/// Decode every image file directly inside `dir`, in lexicographic name
/// order. Subdirectories and undecodable files are skipped with a warning.
pub fn load_images_from_dir(dir: &Path) -> Result<Vec<ImageForm>> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        match image::open(&path) {
            Ok(image) => images.push(ImageForm::Dynamic(image)),
            Err(e) => warn!("Skipping {:?}: {}", path, e),
        }
    }
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Color, Raster};

    #[test]
    fn dir_loading_sorts_by_name_and_skips_junk() {
        let dir = tempfile::tempdir().unwrap();
        Raster::solid(3, 2, Color::rgb(1, 1, 1))
            .to_dynamic()
            .save(dir.path().join("b.png"))
            .unwrap();
        Raster::solid(2, 3, Color::rgb(2, 2, 2))
            .to_dynamic()
            .save(dir.path().join("a.png"))
            .unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"not an image").unwrap();

        let images = load_images_from_dir(dir.path()).unwrap();
        assert_eq!(images.len(), 2);
        let first = images[0].clone().into_raster();
        assert_eq!((first.width(), first.height()), (2, 3));
    }

    #[test]
    fn load_image_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img.png");
        let original = Raster::solid(4, 4, Color::rgb(10, 20, 30));
        original.to_dynamic().save(&path).unwrap();

        let loaded = load_image(&path).unwrap().into_raster();
        assert_eq!(loaded, original);
    }
}
