use crate::{asset, AtlasConfig, AtlasError, Layout, Result, Sprite};
use image::{imageops, ImageFormat, RgbaImage, SubImage};
use log::{debug, info};
use std::path::Path;

/// A composed atlas: the canvas plus the names of the sprites placed in it.
#[derive(Debug, Clone)]
pub struct Atlas {
    image: RgbaImage,
    layout: Layout,
    cell_size: u32,
    names: Vec<String>,
}

/// Pixel rectangle of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Normalized texture coordinates of a cell.
///
/// The rectangle is shrunk by half a texel on every side so that linear
/// sampling at the edges never picks up the neighbouring cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexCoords {
    /// Left edge in `0.0..1.0`.
    pub u: f32,
    /// Top edge in `0.0..1.0`.
    pub v: f32,
    /// Width in texture space.
    pub width: f32,
    /// Height in texture space.
    pub height: f32,
}

impl Atlas {
    /// The composed canvas.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the canvas out of the atlas.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Width and height of the canvas in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Layout the sprites were placed with.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Width and height of a cell.
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of placed sprites.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false` for an atlas built by this crate.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Sprite names in placement order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Index of the first sprite with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Pixel rectangle of the cell holding sprite `index`.
    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        if index >= self.len() {
            return None;
        }
        // Placement already checked that every used cell is inside the canvas.
        let (x, y) = self.layout.position(index, self.cell_size);
        Some(CellRect {
            x: x as u32,
            y: y as u32,
            width: self.cell_size,
            height: self.cell_size,
        })
    }

    /// Texture coordinates of the cell holding sprite `index`.
    pub fn tex_coords(&self, index: usize) -> Option<TexCoords> {
        let rect = self.cell_rect(index)?;
        let (w, h) = self.dimensions();
        let (w, h) = (w as f64, h as f64);
        Some(TexCoords {
            u: ((rect.x as f64 + 0.5) / w) as f32,
            v: ((rect.y as f64 + 0.5) / h) as f32,
            width: ((rect.width as f64 - 1.0) / w) as f32,
            height: ((rect.height as f64 - 1.0) / h) as f32,
        })
    }

    /// A view of the cell holding sprite `index`.
    pub fn sprite_view(&self, index: usize) -> Option<SubImage<&RgbaImage>> {
        let rect = self.cell_rect(index)?;
        Some(imageops::crop_imm(
            &self.image,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
        ))
    }

    /// Write the canvas as PNG, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|err| AtlasError::EncodeError(path.to_owned(), err))?;
        info!(
            "Wrote {}x{} atlas to {}",
            self.image.width(),
            self.image.height(),
            path.display()
        );
        Ok(())
    }
}

fn check_sprites(sprites: &[Sprite], config: &AtlasConfig) -> Result<()> {
    if sprites.is_empty() {
        return Err(AtlasError::EmptyAtlas);
    }
    if let Some(capacity) = config.layout.capacity() {
        if sprites.len() > capacity {
            return Err(AtlasError::CapacityExceeded {
                count: sprites.len(),
                capacity,
            });
        }
    }
    if config.validate_sizes {
        let cell = config.cell_size;
        if let Some(sprite) = sprites.iter().find(|s| s.dimensions() != (cell, cell)) {
            return Err(AtlasError::SizeMismatch {
                name: sprite.name().to_owned(),
                expected: cell,
                actual: sprite.dimensions(),
            });
        }
    }
    Ok(())
}

/// Paste every sprite into a new transparent canvas according to `config`.
///
/// Sprite `i` goes into cell `i` of the layout. Pasted pixels replace the
/// canvas pixels including alpha.
pub fn build_atlas(sprites: &[Sprite], config: &AtlasConfig) -> Result<Atlas> {
    config.validate()?;
    check_sprites(sprites, config)?;

    let (width, height) = config
        .layout
        .canvas_size(sprites.len(), config.cell_size)
        .ok_or_else(|| {
            AtlasError::InvalidConfig(format!(
                "canvas for {} sprites of size {} is too large",
                sprites.len(),
                config.cell_size
            ))
        })?;
    let mut canvas = RgbaImage::new(width, height);

    for (i, sprite) in sprites.iter().enumerate() {
        let (x, y) = config.layout.position(i, config.cell_size);
        let (sw, sh) = sprite.dimensions();
        if x + sw as u64 > width as u64 || y + sh as u64 > height as u64 {
            return Err(AtlasError::PasteOutOfBounds {
                name: sprite.name().to_owned(),
                x: x as u32,
                y: y as u32,
                width: sw,
                height: sh,
            });
        }
        imageops::replace(&mut canvas, sprite.image(), x as i64, y as i64);
        debug!("{:2} {} {:4} {:4}", i, sprite.name(), x, y);
    }

    info!(
        "Built {}x{} atlas ({:?}) from {} sprites",
        width,
        height,
        config.layout,
        sprites.len()
    );
    Ok(Atlas {
        image: canvas,
        layout: config.layout,
        cell_size: config.cell_size,
        names: sprites.iter().map(|s| s.name().to_owned()).collect(),
    })
}

/// Place sprites left to right in a single row of `cell_size` high cells.
pub fn build_linear_atlas(sprites: &[Sprite], cell_size: u32) -> Result<Atlas> {
    let config = AtlasConfig::new(Layout::Linear).with_cell_size(cell_size);
    build_atlas(sprites, &config)
}

/// Place sprites row by row into a square grid with `columns` columns.
pub fn build_grid_atlas(sprites: &[Sprite], columns: u32, cell_size: u32) -> Result<Atlas> {
    let config = AtlasConfig::new(Layout::grid(columns)).with_cell_size(cell_size);
    build_atlas(sprites, &config)
}

/// Load `identifiers` from `base_dir`, build the atlas and write it to
/// `output`.
///
/// Nothing is written if loading or building fails.
pub fn make_atlas<S: AsRef<str>>(
    base_dir: &Path,
    identifiers: &[S],
    config: &AtlasConfig,
    output: &Path,
) -> Result<Atlas> {
    config.validate()?;
    let sprites = asset::load_images(base_dir, identifiers)?;
    let atlas = build_atlas(&sprites, config)?;
    atlas.save(output)?;
    Ok(atlas)
}
