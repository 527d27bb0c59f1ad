use rayon::prelude::*;
use crate::map::{Gid, TileRecord, Tileset};
use crate::{HashMap, LoaderConfig, UnknownBehaviorPolicy};
use super::value::PropertyReader;
use super::{BehaviorKind, Facing, TileBehavior, TypingError, Unit};

/// Property holding the behavior type of a tile.
pub const TYPE_PROPERTY: &str = "type";

/// Immutable mapping from global tile id to behavior.
/// Built once per load and shared read-only afterwards.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct BehaviorMap {
    behaviors: HashMap<Gid, TileBehavior>,
}

impl BehaviorMap {

    /// Types every tile of the tileset.
    /// Undeclared atlas tiles below the tileset's tile count are solid.
    pub fn build(tileset: &Tileset, config: &LoaderConfig) -> Result<Self, TypingError> {
        let type_record = |tile: &TileRecord| -> Result<(Gid, TileBehavior), TypingError> {
            let gid = tileset
                .gid_of(tile.local_id)
                .ok_or(TypingError::GidRangeError { local_id: tile.local_id, first_gid: tileset.first_gid })?;
            let behavior = type_tile(tile, gid, config)?;
            log::trace!("Tile {} (gid {gid}) is {behavior:?}", tile.local_id);
            Ok((gid, behavior))
        };

        // Results are gathered in declaration order first so that the reported error is the earliest one.
        let results: Vec<Result<(Gid, TileBehavior), TypingError>> = if config.parallel {
            tileset.tiles.par_iter().map(type_record).collect()
        }
        else {
            tileset.tiles.iter().map(type_record).collect()
        };

        let mut behaviors = HashMap::default();
        for result in results {
            let (gid, behavior) = result?;
            behaviors.insert(gid, behavior);
        }
        if let Some(last_atlas_id) = tileset.tile_count.and_then(|tile_count| tile_count.checked_sub(1)) {
            if tileset.gid_of(last_atlas_id).is_none() {
                return Err(TypingError::GidRangeError { local_id: last_atlas_id, first_gid: tileset.first_gid });
            }
            for gid in (0..=last_atlas_id).filter_map(|local_id| tileset.gid_of(local_id)) {
                behaviors.entry(gid).or_insert(TileBehavior::None);
            }
        }
        log::debug!("Typed {} tiles of tileset '{}'", behaviors.len(), tileset.name);
        Ok(Self { behaviors })
    }

    /// Merges the behaviors of several tilesets, as referenced together by one map.
    pub fn build_all(tilesets: &[Tileset], config: &LoaderConfig) -> Result<Self, TypingError> {
        let mut merged = Self::default();
        for tileset in tilesets {
            let built = Self::build(tileset, config)?;
            for (gid, behavior) in built.behaviors {
                if merged.behaviors.insert(gid, behavior).is_some() {
                    return Err(TypingError::OverlappingTileError { gid });
                }
            }
        }
        Ok(merged)
    }

    pub fn get(&self, gid: Gid) -> Option<&TileBehavior> {
        self.behaviors.get(&gid)
    }

    pub fn contains(&self, gid: Gid) -> bool {
        self.behaviors.contains_key(&gid)
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Behaviors ordered by gid.
    pub fn sorted(&self) -> Vec<(Gid, TileBehavior)> {
        let mut sorted: Vec<_> = self.behaviors
            .iter()
            .map(|(gid, behavior)| (*gid, *behavior))
            .collect();
        sorted.sort_by_key(|(gid, _)| *gid);
        sorted
    }
}

fn type_tile(tile: &TileRecord, gid: Gid, config: &LoaderConfig) -> Result<TileBehavior, TypingError> {
    let type_name = match tile.properties.get(TYPE_PROPERTY).map(|value| value.trim()) {
        Some(type_name) if !type_name.is_empty() => type_name,
        _ => return Ok(TileBehavior::None),
    };
    let Some(kind) = BehaviorKind::from_type_name(type_name) else {
        return match config.unknown_behavior {
            UnknownBehaviorPolicy::Reject => Err(TypingError::UnknownBehaviorError {
                gid,
                local_id: tile.local_id,
                type_name: String::from(type_name),
            }),
            UnknownBehaviorPolicy::Degrade => {
                log::warn!("Tile {} (gid {gid}) has unknown type '{type_name}', treating it as solid", tile.local_id);
                Ok(TileBehavior::None)
            },
        };
    };

    let reader = PropertyReader {
        gid,
        local_id: tile.local_id,
        kind,
        properties: &tile.properties,
    };
    let behavior = match kind {
        BehaviorKind::Exit => TileBehavior::Exit,
        BehaviorKind::Bounce => TileBehavior::Bounce {
            velocity: reader.float("velocity")?,
        },
        BehaviorKind::Kill => TileBehavior::Kill {
            respawn: reader.coordinate("respawn")?,
            facing: reader.enumeration("facing", Facing::parse, "'left' or 'right'")?,
            unit: reader.enumeration("unit", Unit::parse, "'tile' or 'pixel'")?,
        },
    };
    Ok(behavior)
}
