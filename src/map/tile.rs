use derive_more::*;
use image::ImageFormat;
use crate::HashMap;

/// Raw key/value properties as authored in the editor.
pub type Properties = HashMap<String, String>;

/// A tile of a loaded [`Tileset`](super::Tileset).
#[derive(Clone, Default, Debug)]
pub struct TileRecord {
    /// ID of tile local to its tileset
    pub local_id: u32,
    pub image: Option<TileImage>,
    pub properties: Properties,
}

#[derive(Clone, PartialEq, Debug)]
pub enum TileImage {
    /// Decoded payload. Always starts with the signature of `format`.
    Embedded {
        format: ImageFormat,
        bytes: Vec<u8>,
    },
    /// Image file on disk, left to the renderer.
    External {
        source: String,
    },
}

/// Global tile id, as referenced by map layers.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug, Hash, Ord, PartialOrd, Display, From)]
pub struct Gid(pub u32);

impl Gid {
    pub const FLIPPED_HORIZONTALLY: u32 = 0x8000_0000;
    pub const FLIPPED_VERTICALLY: u32 = 0x4000_0000;
    pub const FLIPPED_DIAGONALLY: u32 = 0x2000_0000;
    pub const ROTATED_HEXAGONAL_120: u32 = 0x1000_0000;
    const FLAG_MASK: u32 =
        Self::FLIPPED_HORIZONTALLY |
        Self::FLIPPED_VERTICALLY |
        Self::FLIPPED_DIAGONALLY |
        Self::ROTATED_HEXAGONAL_120;

    /// Highest gid that does not collide with the flag bits.
    pub const MAX: Gid = Gid(!Self::FLAG_MASK);

    /// Gid as stored in a layer, with flip and rotation flags stripped.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw & !Self::FLAG_MASK)
    }

    /// Zero marks an empty cell and never refers to a tile.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod test {
    use super::Gid;

    #[test]
    fn strips_flip_flags() {
        let raw = 3 | Gid::FLIPPED_HORIZONTALLY | Gid::FLIPPED_DIAGONALLY;
        assert_eq!(Gid(3), Gid::from_raw(raw));
        assert_eq!(Gid(3), Gid::from_raw(3));
        assert!(Gid::from_raw(Gid::FLIPPED_VERTICALLY).is_empty());
    }

    #[test]
    fn max_is_below_flags() {
        assert_eq!(Gid::MAX, Gid::from_raw(u32::MAX));
        assert_eq!(Gid(0x0FFF_FFFF), Gid::MAX);
    }
}
