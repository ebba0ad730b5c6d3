/// Strategy that maps the index of a sprite to its cell in the atlas.
///
/// Cells are filled in the order in which sprites are supplied, so reordering
/// the input changes the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// A single row. The canvas grows to the right with every sprite.
    Linear,
    /// A square grid with `columns` cells per row and as many rows. Cells are
    /// filled row by row.
    #[allow(missing_docs)]
    Grid { columns: u32 },
}

impl Layout {
    /// Square grid layout with the given number of columns.
    pub fn grid(columns: u32) -> Layout {
        Layout::Grid { columns }
    }

    /// Maximum number of sprites the layout can hold. `None` if unlimited.
    pub fn capacity(&self) -> Option<usize> {
        match *self {
            Layout::Linear => None,
            Layout::Grid { columns } => Some(columns as usize * columns as usize),
        }
    }

    /// Number of cells along the x and y axis for `count` sprites.
    pub fn cells(&self, count: usize) -> (u64, u64) {
        match *self {
            Layout::Linear => (count as u64, 1),
            Layout::Grid { columns } => (columns as u64, columns as u64),
        }
    }

    /// Canvas size in pixels for `count` sprites, or `None` if either side
    /// does not fit into a `u32` or the RGBA buffer does not fit into a
    /// `usize`.
    pub fn canvas_size(&self, count: usize, cell_size: u32) -> Option<(u32, u32)> {
        let (cols, rows) = self.cells(count);
        let width = cols.checked_mul(cell_size as u64)?;
        let height = rows.checked_mul(cell_size as u64)?;
        if width > u32::MAX as u64 || height > u32::MAX as u64 {
            return None;
        }
        let bytes = width.checked_mul(height)?.checked_mul(4)?;
        if bytes > usize::MAX as u64 {
            return None;
        }
        Some((width as u32, height as u32))
    }

    /// Column and row of the cell at `index`.
    ///
    /// Does not check capacity: for a grid, indices past `columns * columns`
    /// map to rows below the canvas.
    pub fn cell(&self, index: usize) -> (u64, u64) {
        match *self {
            Layout::Linear => (index as u64, 0),
            Layout::Grid { columns } => {
                let columns = columns as u64;
                (index as u64 % columns, index as u64 / columns)
            }
        }
    }

    /// Top-left pixel offset of the cell at `index`.
    pub fn position(&self, index: usize, cell_size: u32) -> (u64, u64) {
        let (col, row) = self.cell(index);
        (col * cell_size as u64, row * cell_size as u64)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Grid {
            columns: crate::DEFAULT_GRID_COLUMNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_positions() {
        let l = Layout::Linear;
        assert_eq!(l.canvas_size(3, 256), Some((768, 256)));
        assert_eq!(l.position(1, 256), (256, 0));
        assert_eq!(l.capacity(), None);
    }

    #[test]
    fn grid_wraps_to_next_row() {
        let l = Layout::grid(8);
        assert_eq!(l.canvas_size(9, 256), Some((2048, 2048)));
        assert_eq!(l.position(7, 256), (1792, 0));
        assert_eq!(l.position(8, 256), (0, 256));
        assert_eq!(l.position(63, 256), (1792, 1792));
        assert_eq!(l.capacity(), Some(64));
    }

    #[test]
    fn grid_matches_offset_arithmetic() {
        // x = (i*cell) mod (n*cell), y = floor(i*cell / (n*cell)) * cell
        let cell = 256u64;
        for columns in 1..=9u32 {
            let size = columns as u64 * cell;
            let l = Layout::grid(columns);
            for i in 0..(columns as usize * columns as usize) {
                let offset = i as u64 * cell;
                let expected = (offset % size, offset / size * cell);
                assert_eq!(l.position(i, cell as u32), expected);
            }
        }
    }

    #[test]
    fn canvas_overflow() {
        assert_eq!(Layout::Linear.canvas_size(usize::MAX, 256), None);
        assert_eq!(Layout::grid(u32::MAX).canvas_size(1, 2), None);
        // Both sides fit, the pixel buffer does not.
        assert_eq!(Layout::grid(2).canvas_size(1, 2_147_483_647), None);
    }
}
