use std::num::ParseIntError;
use std::str::Utf8Error;
use derive_more::*;

/// Failure while loading a tileset or the tileset references of a map.
/// Any of these aborts the whole load.
#[derive(Error, Display, From, Debug)]
pub enum LoadError {
    #[display(fmt="{_0}")]
    XmlError(roxmltree::Error),
    #[display(fmt="{_0}")]
    Utf8Error(Utf8Error),
    #[display(fmt="{_0}")]
    ParseIntError(ParseIntError),
    #[display(fmt="{_0}")]
    IoError(std::io::Error),
    #[display(fmt="Missing tag '{tag_name}'")]
    #[from(ignore)]
    MissingTagError { tag_name: String },
    #[display(fmt="Missing attribute '{attribute}' on '{tag_name}'")]
    #[from(ignore)]
    MissingAttributeError { tag_name: String, attribute: String },
    #[display(fmt="Unexpected value {value}")]
    #[from(ignore)]
    InvalidAttributeValue { value: String },
    #[display(fmt="Tile {tile_id}: failed to decode image, {reason}")]
    #[from(ignore)]
    DecodeError { tile_id: u32, reason: String },
    #[display(fmt="Tileset image: failed to decode, {reason}")]
    #[from(ignore)]
    TilesetImageDecodeError { reason: String },
    #[display(fmt="Tileset firstgid must not be 0")]
    #[from(ignore)]
    ZeroFirstGidError,
    #[display(fmt="Tile {tile_id}: gid {first_gid} + {tile_id} is beyond the highest gid")]
    #[from(ignore)]
    GidRangeError { tile_id: u32, first_gid: u32 },
    #[display(fmt="Tile {tile_id}: duplicate property '{key}'")]
    #[from(ignore)]
    DuplicatePropertyError { tile_id: u32, key: String },
    #[display(fmt="Tile {tile_id} declared more than once")]
    #[from(ignore)]
    DuplicateTileError { tile_id: u32 },
}
