use crate::{AtlasError, Result};
use image::{io::Reader, RgbaImage};
use log::debug;
use std::{
    io,
    path::{Path, PathBuf},
};

/// File extension appended to identifiers that do not carry one.
pub const DEFAULT_EXTENSION: &str = "png";

/// A decoded source image together with the name it was loaded under.
#[derive(Debug, Clone)]
pub struct Sprite {
    name: String,
    image: RgbaImage,
}

impl Sprite {
    /// Wrap an image that is already in memory.
    pub fn new<S: Into<String>>(name: S, image: RgbaImage) -> Self {
        Sprite {
            name: name.into(),
            image,
        }
    }

    /// The identifier this sprite was loaded from, without the implicit
    /// extension.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Take the image out of the sprite.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Map an identifier to a file path below `base_dir`.
///
/// `.png` is appended unless the identifier already has an extension.
pub fn resolve_path(base_dir: &Path, identifier: &str) -> Result<PathBuf> {
    if identifier.is_empty() {
        return Err(AtlasError::InvalidConfig(
            "identifier must not be empty".to_owned(),
        ));
    }
    let mut path = base_dir.join(identifier);
    if Path::new(identifier).extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    Ok(path)
}

// The file format is guessed from the content, so a PNG with a misleading
// extension still loads.
fn decode(path: &Path) -> Result<RgbaImage> {
    let not_found = |err: io::Error| match err.kind() {
        io::ErrorKind::NotFound => AtlasError::AssetNotFound(path.to_owned()),
        _ => AtlasError::IoError(err),
    };
    let reader = Reader::open(path)
        .map_err(not_found)?
        .with_guessed_format()
        .map_err(not_found)?;
    let image = reader
        .decode()
        .map_err(|err| AtlasError::DecodeError(path.to_owned(), err))?;
    Ok(image.into_rgba8())
}

/// Load a single sprite.
pub fn load_image(base_dir: &Path, identifier: &str) -> Result<Sprite> {
    let path = resolve_path(base_dir, identifier)?;
    let image = decode(&path)?;
    debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    let name = match Path::new(identifier).extension() {
        Some(ext) if ext == DEFAULT_EXTENSION => identifier
            .strip_suffix(DEFAULT_EXTENSION)
            .and_then(|stem| stem.strip_suffix('.'))
            .unwrap_or(identifier)
            .to_owned(),
        _ => identifier.to_owned(),
    };
    Ok(Sprite::new(name, image))
}

/// Load all identifiers in order.
///
/// Stops at the first identifier that cannot be loaded; no partial result is
/// returned.
pub fn load_images<S: AsRef<str>>(base_dir: &Path, identifiers: &[S]) -> Result<Vec<Sprite>> {
    if identifiers.is_empty() {
        return Err(AtlasError::EmptyAtlas);
    }
    identifiers
        .iter()
        .map(|id| load_image(base_dir, id.as_ref()))
        .collect()
}
