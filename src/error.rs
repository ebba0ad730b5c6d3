use image::ImageError;
use std::{error::Error, fmt, io, path::PathBuf};

/// An error occured while building or writing an atlas.
#[derive(Debug)]
pub enum AtlasError {
    /// The resolved path of an identifier does not exist.
    AssetNotFound(PathBuf),
    /// The file exists but could not be decoded as an image.
    DecodeError(PathBuf, ImageError),
    /// A sprite is not exactly `cell_size × cell_size`.
    SizeMismatch {
        /// Name of the offending sprite.
        name: String,
        /// Width and height of a cell.
        expected: u32,
        /// Actual width and height of the sprite.
        actual: (u32, u32),
    },
    /// More sprites than a grid layout has cells.
    CapacityExceeded {
        /// Number of sprites supplied.
        count: usize,
        /// Number of cells in the grid.
        capacity: usize,
    },
    /// A sprite would be pasted (partly) outside of the canvas.
    PasteOutOfBounds {
        /// Name of the offending sprite.
        name: String,
        /// Left edge of the paste region.
        x: u32,
        /// Top edge of the paste region.
        y: u32,
        /// Width of the sprite.
        width: u32,
        /// Height of the sprite.
        height: u32,
    },
    /// Writing the output file failed.
    EncodeError(PathBuf, ImageError),
    /// No sprites were supplied.
    EmptyAtlas,
    /// A configuration value or identifier is not usable. String contains
    /// detailed message.
    InvalidConfig(String),
    /// Any other IO error while reading an asset.
    IoError(io::Error),
}

impl From<io::Error> for AtlasError {
    fn from(err: io::Error) -> Self {
        AtlasError::IoError(err)
    }
}

impl fmt::Display for AtlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasError::AssetNotFound(path) => write!(f, "Asset not found: {}", path.display()),
            AtlasError::DecodeError(path, err) => {
                write!(f, "Could not decode {}: {}", path.display(), err)
            }
            AtlasError::SizeMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "Sprite {} is {}x{}, expected {}x{}",
                name, actual.0, actual.1, expected, expected
            ),
            AtlasError::CapacityExceeded { count, capacity } => write!(
                f,
                "Too many sprites for grid: {} (capacity {})",
                count, capacity
            ),
            AtlasError::PasteOutOfBounds {
                name,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "Sprite {} ({}x{} at {},{}) does not fit into the canvas",
                name, width, height, x, y
            ),
            AtlasError::EncodeError(path, err) => {
                write!(f, "Could not write {}: {}", path.display(), err)
            }
            AtlasError::EmptyAtlas => write!(f, "Cannot build an atlas without sprites"),
            AtlasError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            AtlasError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for AtlasError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AtlasError::DecodeError(_, err) | AtlasError::EncodeError(_, err) => Some(err),
            AtlasError::IoError(err) => Some(err),
            _ => None,
        }
    }
}
