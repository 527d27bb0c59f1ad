mod error;
mod map;
mod tile;
mod tileset;
pub mod parse;

pub use error::*;
pub use map::*;
pub use tile::*;
pub use tileset::*;
