use derive_more::*;
use crate::map::Gid;

/// Failure while typing tile properties into behaviors.
/// Any of these aborts the whole build.
#[derive(Error, Display, Debug)]
pub enum TypingError {
    #[display(fmt="Tile {local_id} (gid {gid}): unknown behavior type '{type_name}'")]
    UnknownBehaviorError { gid: Gid, local_id: u32, type_name: String },
    #[display(fmt="Tile {local_id} (gid {gid}): {behavior} requires '{parameter}'")]
    MissingParameterError { gid: Gid, local_id: u32, behavior: &'static str, parameter: &'static str },
    #[display(fmt="Tile {local_id} (gid {gid}): cannot parse '{parameter}' from '{value}', expected {expected}")]
    ParseError { gid: Gid, local_id: u32, parameter: &'static str, value: String, expected: &'static str },
    #[display(fmt="Tile {local_id}: gid {first_gid} + {local_id} is beyond the highest gid")]
    GidRangeError { local_id: u32, first_gid: u32 },
    #[display(fmt="Gid {gid} is declared by more than one tileset")]
    OverlappingTileError { gid: Gid },
}
