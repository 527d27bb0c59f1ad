use std::path::Path;
use roxmltree::Document;
use crate::map::{parse, LoadError, Tileset, TsxLoader};
use crate::LoaderConfig;

/// Loader for the tilesets referenced by a .tmx map.
/// Embedded tilesets are decoded in place, external ones are read relative to the map file.
#[derive(Clone, Default, Debug)]
pub struct TmxLoader {
    pub config: LoaderConfig,
}

impl TmxLoader {

    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Vec<Tileset>, LoadError> {
        let path = path.as_ref();
        log::debug!("Loading map tilesets of {}", path.display());
        let bytes = std::fs::read(path)?;
        let parent = path.parent().and_then(Path::to_str).filter(|parent| !parent.is_empty());
        self.load(&bytes, parent)
    }

    /// Loads every tileset of the map in declaration order.
    pub fn load(&self, bytes: &[u8], parent_path: Option<&str>) -> Result<Vec<Tileset>, LoadError> {
        let source = std::str::from_utf8(bytes)?;
        let doc = Document::parse(source)?;
        let map = parse::TiledMap::parse_doc(doc, parent_path)?;
        let tsx_loader = TsxLoader::new(self.config.clone());
        let mut tilesets = Vec::with_capacity(map.tilesets.len());
        for entry in map.tilesets {
            let first_gid = entry.first_gid();
            let tileset = match entry {
                parse::TilesetEntry::Internal { tileset, .. } => Tileset::from_parsed(tileset, &self.config)?,
                parse::TilesetEntry::External { source, .. } => {
                    let mut tileset = tsx_loader.load_path(&source)?;

                    // The map owns the gid offset of external tilesets
                    tileset.first_gid = first_gid;
                    tileset.check_gids()?;
                    tileset
                },
            };
            log::trace!("Tileset '{}' starts at gid {first_gid}", tileset.name);
            tilesets.push(tileset);
        }
        Ok(tilesets)
    }

    pub fn extensions(&self) -> &[&str] {
        &["tmx"]
    }
}

#[cfg(test)]
mod test {
    use crate::behavior::{BehaviorMap, TileBehavior};
    use crate::map::{Gid, LoadError};
    use crate::LoaderConfig;
    use super::TmxLoader;

    #[test]
    fn level_with_external_tileset() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/maps/level.tmx");
        let tilesets = TmxLoader::default().load_path(path).unwrap();
        assert_eq!(2, tilesets.len());

        let collision = &tilesets[0];
        assert_eq!("Collision", collision.name);
        assert_eq!(1, collision.first_gid);
        assert_eq!(4, collision.tiles.len());

        let decoration = &tilesets[1];
        assert_eq!("Decoration", decoration.name);
        assert_eq!(5, decoration.first_gid);
        assert_eq!(Some(4), decoration.tile_count);
    }

    #[test]
    fn map_entry_overrides_external_first_gid() {
        let source = r#"<map><tileset firstgid="10" source="collision_base.tsx"/></map>"#;
        let parent = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/maps");
        let tilesets = TmxLoader::default().load(source.as_bytes(), Some(parent)).unwrap();
        assert_eq!(1, tilesets.len());
        assert_eq!(10, tilesets[0].first_gid);

        let behaviors = BehaviorMap::build_all(&tilesets, &LoaderConfig::default()).unwrap();
        assert_eq!(Some(&TileBehavior::None), behaviors.get(Gid(10)));
        assert_eq!(Some(&TileBehavior::Exit), behaviors.get(Gid(11)));
        assert_eq!(Some(&TileBehavior::Bounce { velocity: -850.0 }), behaviors.get(Gid(12)));
        assert!(!behaviors.contains(Gid(1)));
        assert!(!behaviors.contains(Gid(14)));
    }

    #[test]
    fn map_entry_first_gid_is_range_checked() {
        let parent = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/maps");
        let source = r#"<map><tileset firstgid="268435454" source="collision_base.tsx"/></map>"#;
        let result = TmxLoader::default().load(source.as_bytes(), Some(parent));
        assert!(matches!(result, Err(LoadError::GidRangeError { tile_id: 2, first_gid: 268435454 })));

        let source = r#"<map><tileset firstgid="0" source="collision_base.tsx"/></map>"#;
        let result = TmxLoader::default().load(source.as_bytes(), Some(parent));
        assert!(matches!(result, Err(LoadError::ZeroFirstGidError)));
    }

    #[test]
    fn missing_external_tileset() {
        let source = r#"<map><tileset firstgid="1" source="does_not_exist.tsx"/></map>"#;
        let result = TmxLoader::default().load(source.as_bytes(), Some("/nonexistent"));
        assert!(matches!(result, Err(LoadError::IoError(_))));
    }
}
