pub mod content;
pub mod tileset_file;
pub mod wfc;

pub use tileset_file::{TILESET_FORMAT_VERSION, TilesetFile, TilesetLoadError};
pub use wfc::*;
