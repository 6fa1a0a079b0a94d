//! Image header probing

use std::path::Path;

use anyhow::{Context, Result};

/// Read `(width, height)` from the image's header metadata.
///
/// `image::image_dimensions` decodes only as much of the file as the format
/// needs to expose its dimensions; pixel data is never loaded.
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .with_context(|| format!("Failed to read image header: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_dimensions_from_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tiny.png");
        image::RgbImage::new(7, 3).save(&path).unwrap();

        assert_eq!(read_dimensions(&path).unwrap(), (7, 3));
    }

    #[test]
    fn corrupt_file_with_image_extension_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.png");
        std::fs::write(&path, b"not an image at all").unwrap();

        let err = read_dimensions(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.png"));
    }
}
