//! Solid-colour placeholder icons for builds that run before the generated
//! icon exists.

use crate::error::{IconGenError, Result};
use image::{ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Indigo `#6366f1`, the extension's primary colour.
pub const PRIMARY_COLOR: Rgb<u8> = Rgb([99, 102, 241]);

pub fn render(size: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("icon{}.png", size))
}

/// Writes `icon16.png`, `icon48.png` and `icon128.png` into `dir`.
pub fn write_placeholder_icons(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(ICON_SIZES.len());

    for size in ICON_SIZES {
        let path = icon_path(dir, size);
        render(size, PRIMARY_COLOR)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(source) => IconGenError::Io {
                    path: path.clone(),
                    source,
                },
                other => IconGenError::Encode(other.to_string()),
            })?;
        log::info!("Created {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_solid() {
        let icon = render(16, PRIMARY_COLOR);
        assert_eq!(icon.dimensions(), (16, 16));
        assert!(icon.pixels().all(|p| *p == PRIMARY_COLOR));
    }

    #[test]
    fn test_writes_all_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_placeholder_icons(dir.path()).unwrap();
        assert_eq!(paths.len(), 3);

        for (path, size) in paths.iter().zip(ICON_SIZES) {
            assert_eq!(path, &icon_path(dir.path(), size));
            let decoded = image::open(path).unwrap().to_rgb8();
            assert_eq!(decoded.dimensions(), (size, size));
            assert_eq!(*decoded.get_pixel(size / 2, size / 2), PRIMARY_COLOR);
        }
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_placeholder_icons(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, IconGenError::Io { .. }));
    }
}
