use crate::{AtlasError, Layout, Result};

/// Width and height of a cell unless configured otherwise.
pub const DEFAULT_CELL_SIZE: u32 = 256;

/// Number of columns of the default grid layout.
pub const DEFAULT_GRID_COLUMNS: u32 = 8;

/// Settings for building an atlas.
///
/// The default is an 8×8 grid of 256×256 cells with size validation enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasConfig {
    /// Width and height of every cell in pixels.
    pub cell_size: u32,
    /// How sprites are arranged.
    pub layout: Layout,
    /// Reject sprites that are not exactly `cell_size × cell_size`.
    ///
    /// If disabled, smaller sprites leave part of their cell transparent and
    /// larger ones spill into neighbouring cells. A spill past the canvas is
    /// still an error.
    pub validate_sizes: bool,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        AtlasConfig {
            cell_size: DEFAULT_CELL_SIZE,
            layout: Layout::default(),
            validate_sizes: true,
        }
    }
}

impl AtlasConfig {
    /// Default configuration with the given layout.
    pub fn new(layout: Layout) -> Self {
        AtlasConfig {
            layout,
            ..Default::default()
        }
    }

    /// Change the cell size.
    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Change the layout.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Enable or disable the sprite size check.
    pub fn with_size_validation(mut self, enabled: bool) -> Self {
        self.validate_sizes = enabled;
        self
    }

    /// Check that the configuration describes a usable canvas.
    pub fn validate(&self) -> Result<()> {
        if self.cell_size == 0 {
            return Err(AtlasError::InvalidConfig(
                "cell size must be positive".to_owned(),
            ));
        }
        if let Layout::Grid { columns: 0 } = self.layout {
            return Err(AtlasError::InvalidConfig(
                "grid needs at least one column".to_owned(),
            ));
        }
        Ok(())
    }
}
