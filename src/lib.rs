#![warn(clippy::all)]
#![warn(missing_docs)]
/*!

Utilities for assembling many small, equally sized PNG images into a single
texture atlas. Graphics applications usually prefer a few large textures over
many small files; this crate pastes every source image into its own fixed-size
cell of one larger canvas and writes that canvas back out as PNG.

There is no packing: cells are assigned purely by the position of an image in
the input list. Two layouts exist, a single row ([Layout::Linear]) and a
square grid filled row by row ([Layout::Grid]).

# Basic Usage

## Build from files

[make_atlas] loads a list of identifiers from a directory (appending `.png`
where no extension is given), builds the atlas and saves it.

```no_run
use gridatlas::{make_atlas, AtlasConfig};
use std::path::Path;

let names = ["dalek", "hal-9000", "tardis"];
let atlas = make_atlas(
    Path::new("assets"),
    &names,
    &AtlasConfig::default(),
    Path::new("_atlas.png"),
).unwrap();
println!("Atlas: {}x{}", atlas.dimensions().0, atlas.dimensions().1);
```

## Build from images in memory

```
use gridatlas::{build_grid_atlas, Sprite};
use image::RgbaImage;

let sprites: Vec<Sprite> = (0..9)
    .map(|i| Sprite::new(format!("sprite_{}", i), RgbaImage::new(32, 32)))
    .collect();
let atlas = build_grid_atlas(&sprites, 8, 32).unwrap();
assert_eq!(atlas.dimensions(), (256, 256));

// The ninth sprite wraps around to the second row.
let rect = atlas.cell_rect(8).unwrap();
assert_eq!((rect.x, rect.y), (0, 32));
```

## Looking up sprites

The atlas remembers which name went into which cell, so renderers do not need
to keep their own copy of the list.

```
# use gridatlas::{build_linear_atlas, Sprite};
# use image::RgbaImage;
# let sprites = vec![
#     Sprite::new("a", RgbaImage::new(16, 16)),
#     Sprite::new("b", RgbaImage::new(16, 16)),
# ];
let atlas = build_linear_atlas(&sprites, 16).unwrap();
let index = atlas.index_of("b").unwrap();
let uv = atlas.tex_coords(index).unwrap();
assert!(uv.u > 0.5);
```

*/

pub(crate) mod asset;
pub(crate) mod atlas;
pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod layout;

/// A specialized `Result` type for atlas building functions.
pub type Result<T> = std::result::Result<T, AtlasError>;

pub use asset::{load_image, load_images, resolve_path, Sprite, DEFAULT_EXTENSION};
pub use atlas::{
    build_atlas, build_grid_atlas, build_linear_atlas, make_atlas, Atlas, CellRect, TexCoords,
};
pub use config::{AtlasConfig, DEFAULT_CELL_SIZE, DEFAULT_GRID_COLUMNS};
pub use error::AtlasError;
pub use layout::Layout;
