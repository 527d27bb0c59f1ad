use std::sync::Arc;
use derive_more::*;
use glam::Vec2;
use crate::behavior::{BehaviorMap, TileBehavior, Unit};
use crate::map::Gid;
use super::{EntityEffect, EntityState, SpatialConversion, TileGrid};

/// Turns collisions against tiles into effects on the colliding entity.
/// Holds only immutable state, so one resolver can be shared by any number of threads.
#[derive(Clone, Debug)]
pub struct Resolver<S = TileGrid> {
    behaviors: Arc<BehaviorMap>,
    spatial: S,
}

impl<S: SpatialConversion> Resolver<S> {

    pub fn new(behaviors: Arc<BehaviorMap>, spatial: S) -> Self {
        Self { behaviors, spatial }
    }

    pub fn behaviors(&self) -> &BehaviorMap {
        &self.behaviors
    }

    /// Effect of `entity` touching tile `gid`.
    /// `normal` points from the entity into the tile, so an entity landing on a tile has a normal of +Y in y-down space.
    /// Tiles no loaded tileset declares are treated as solid and logged.
    pub fn resolve(&self, entity: &EntityState, gid: Gid, normal: Vec2) -> EntityEffect {
        match self.try_resolve(entity, gid, normal) {
            Ok(effect) => effect,
            Err(err) => {
                log::warn!("{err}, treating it as solid");
                EntityEffect::NoEffect
            },
        }
    }

    /// Like [`Resolver::resolve`], but reports tiles missing from the behavior map.
    pub fn try_resolve(&self, entity: &EntityState, gid: Gid, normal: Vec2) -> Result<EntityEffect, UnknownTileError> {
        let gid = Gid::from_raw(gid.0);
        let behavior = self.behaviors
            .get(gid)
            .ok_or(UnknownTileError { gid })?;
        let effect = match *behavior {
            TileBehavior::None => EntityEffect::NoEffect,
            TileBehavior::Exit if entity.transition_pending => EntityEffect::NoEffect,
            TileBehavior::Exit => EntityEffect::TransitionLevel,
            TileBehavior::Bounce { velocity } => {
                let normal = normal.normalize_or_zero();
                if normal == Vec2::ZERO {
                    log::debug!("Bounce on tile {gid} without a collision normal");
                    EntityEffect::NoEffect
                }
                else {
                    EntityEffect::OverrideVelocity { normal, value: velocity }
                }
            },
            TileBehavior::Kill { respawn, facing, unit } => {
                let position = match unit {
                    Unit::Pixel => respawn,
                    Unit::Tile => self.spatial.tile_to_pixel(respawn),
                };
                EntityEffect::Reposition { position, facing }
            },
        };
        Ok(effect)
    }
}

/// Collision against a gid that no loaded tileset declares.
#[derive(Copy, Clone, Eq, PartialEq, Error, Display, Debug)]
#[display(fmt="Unknown tile gid {gid}")]
pub struct UnknownTileError {
    pub gid: Gid,
}
