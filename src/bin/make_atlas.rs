//
// Builds the icon atlas used by the graph renderer.
//
// Reads every listed image from the current directory and writes an 8x8 grid
// of 256x256 cells to `_atlas.png`. The renderer looks sprites up by position,
// so keep its list of names in the same order as `ICONS` followed by
// `BACKGROUNDS`.
//
use gridatlas::{make_atlas, AtlasConfig, Layout, DEFAULT_CELL_SIZE, DEFAULT_GRID_COLUMNS};
use log::{error, info};
use std::{path::Path, process};

const ICONS: &[&str] = &[
    "dalek",
    "hal-9000",
    "mr_squiggle",
    "tardis",
    "australia",
    "china",
    "russia",
    "ukraine",
    "check",
];

const BACKGROUNDS: &[&str] = &[
    "flat_circle",
    "flat_square",
    "round_circle",
    "round_square",
    "transparent",
];

const OUTPUT: &str = "_atlas.png";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let identifiers: Vec<&str> = ICONS.iter().chain(BACKGROUNDS).copied().collect();
    let config =
        AtlasConfig::new(Layout::grid(DEFAULT_GRID_COLUMNS)).with_cell_size(DEFAULT_CELL_SIZE);

    match make_atlas(Path::new("."), &identifiers, &config, Path::new(OUTPUT)) {
        Ok(atlas) => {
            for (i, name) in atlas.names().iter().enumerate() {
                info!("{:2} {}", i, name);
            }
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}
