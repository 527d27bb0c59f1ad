use glam::Vec2;
use crate::map::Tileset;

/// Converts tile coordinates to pixel coordinates.
/// Implemented by whatever owns the level's spatial layout.
pub trait SpatialConversion: Send + Sync {
    fn tile_to_pixel(&self, tile: Vec2) -> Vec2;
}

/// Uniform grid of equally sized tiles anchored at the origin.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct TileGrid {
    pub tile_size: Vec2,
}

impl TileGrid {
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self { tile_size: Vec2::new(tile_width, tile_height) }
    }

    /// Grid matching the tileset's tile size, or the default grid when the tileset declares none.
    pub fn from_tileset(tileset: &Tileset) -> Self {
        if tileset.tile_width == 0 || tileset.tile_height == 0 {
            return Self::default();
        }
        Self::new(tileset.tile_width as f32, tileset.tile_height as f32)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(32.0, 32.0)
    }
}

impl SpatialConversion for TileGrid {
    fn tile_to_pixel(&self, tile: Vec2) -> Vec2 {
        tile * self.tile_size
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;
    use crate::map::Tileset;
    use super::{SpatialConversion, TileGrid};

    #[test]
    fn tile_to_pixel() {
        let grid = TileGrid::new(16.0, 8.0);
        assert_eq!(Vec2::new(80.0, 80.0), grid.tile_to_pixel(Vec2::new(5.0, 10.0)));
        assert_eq!(Vec2::new(-16.0, 4.0), grid.tile_to_pixel(Vec2::new(-1.0, 0.5)));
    }

    #[test]
    fn from_tileset() {
        let tileset = Tileset { tile_width: 16, tile_height: 24, ..Default::default() };
        assert_eq!(TileGrid::new(16.0, 24.0), TileGrid::from_tileset(&tileset));

        let undeclared = Tileset::default();
        assert_eq!(TileGrid::default(), TileGrid::from_tileset(&undeclared));
    }
}
