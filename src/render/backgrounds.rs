//! Background image library.

use crate::error::{Result, ScribeError};
use image::RgbaImage;
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};
use tracing::info;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// The set of images a card can be drawn on, scanned once from a directory.
#[derive(Debug, Clone)]
pub struct BackgroundLibrary {
    dir: PathBuf,
    files: Vec<PathBuf>,
}

impl BackgroundLibrary {
    /// Scans `dir` for image files.
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ScribeError::render(format!(
                "Failed to read backgrounds directory {}: {e}",
                dir.display()
            ))
        })?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        files.sort();

        info!("Loaded {} backgrounds from {}", files.len(), dir.display());
        Ok(Self {
            dir: dir.to_path_buf(),
            files,
        })
    }

    /// Returns the background files in name order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Picks a random background.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Path> {
        self.files
            .choose(rng)
            .map(PathBuf::as_path)
            .ok_or_else(|| {
                ScribeError::render(format!("No backgrounds in {}", self.dir.display()))
            })
    }

    /// Reads an image's dimensions without decoding the pixels.
    pub fn dimensions(path: &Path) -> Result<(u32, u32)> {
        image::image_dimensions(path).map_err(|e| {
            ScribeError::render(format!("Failed to read size of {}: {e}", path.display()))
        })
    }

    /// Decodes a background into an RGBA raster.
    pub fn load(path: &Path) -> Result<RgbaImage> {
        let image = image::open(path).map_err(|e| {
            ScribeError::render(format!("Failed to decode {}: {e}", path.display()))
        })?;
        Ok(image.to_rgba8())
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
