use roxmltree::{Document, Node};
use crate::map::LoadError;
use crate::map::parse;

/// The tileset references of a TMX <map>.
/// Layers are owned by the level format and are not read here.
#[derive(Clone, Default, Debug)]
pub struct TiledMap {
    pub version: String,
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tilesets: Vec<TilesetEntry>,
}

impl TiledMap {

    pub fn parse_doc(map_doc: Document, parent_path: Option<&str>) -> Result<Self, LoadError> {
        let root = map_doc.root();
        let map_node = root
            .children()
            .find(|node| node.tag_name().name() == "map")
            .ok_or(LoadError::MissingTagError { tag_name: String::from("map") })?;
        let mut map = Self::default();
        map.parse(map_node, parent_path)?;
        Ok(map)
    }

    fn parse(&mut self, map_node: Node, parent_path: Option<&str>) -> Result<(), LoadError> {

        // Parses map attributes
        for attribute in map_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "version" => self.version = String::from(value),
                "width" => self.width = value.parse()?,
                "height" => self.height = value.parse()?,
                "tilewidth" => self.tile_width = value.parse()?,
                "tileheight" => self.tile_height = value.parse()?,
                _ => {}
            }
        }

        // Traverses children
        for node in map_node.children() {
            let tag_name = node.tag_name().name();
            match tag_name {
                "tileset" => self.tilesets.push(TilesetEntry::parse(node, parent_path)?),
                _ => {},
            }
        }

        Ok(())
    }
}

/// A single tileset stored in a [`TiledMap`].
/// Either stores the tileset, or references it in another file.
#[derive(Clone, Debug)]
pub enum TilesetEntry {
    Internal {
        first_gid: u32,
        tileset: parse::Tileset,
    },
    External {
        first_gid: u32,
        source: String,
    }
}

impl TilesetEntry {

    pub fn first_gid(&self) -> u32 {
        match self {
            Self::Internal { first_gid, .. } => *first_gid,
            Self::External { first_gid, .. } => *first_gid,
        }
    }

    fn parse(entry_node: Node, parent_path: Option<&str>) -> Result<Self, LoadError> {
        let first_gid: u32 = entry_node
            .attribute("firstgid")
            .ok_or(LoadError::MissingAttributeError {
                tag_name: String::from("tileset"),
                attribute: String::from("firstgid"),
            })?
            .parse()?;
        let source: Option<&str> = entry_node.attribute("source");

        if let Some(source) = source {
            let source = match parent_path {
                Some(parent_path) => format!("{parent_path}/{source}"),
                None => String::from(source),
            };
            Ok(TilesetEntry::External { first_gid, source })
        }
        else {
            let mut tileset = parse::Tileset::default();
            tileset.parse(entry_node, parent_path)?;
            tileset.first_gid = first_gid;
            Ok(TilesetEntry::Internal { first_gid, tileset })
        }
    }
}

#[cfg(test)]
mod test {
    use roxmltree::Document;
    use crate::map::LoadError;
    use super::{TiledMap, TilesetEntry};

    #[test]
    fn tileset_entries() {
        let source = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.10" width="20" height="15" tilewidth="32" tileheight="32">
 <tileset firstgid="1" source="collision.tsx"/>
 <tileset firstgid="5" name="Inline" tilewidth="32" tileheight="32">
  <tile id="0"/>
 </tileset>
 <layer id="1" name="collision tiles" width="20" height="15"/>
</map>"#;
        let doc = Document::parse(source).unwrap();
        let map = TiledMap::parse_doc(doc, Some("levels")).unwrap();
        assert_eq!(20, map.width);
        assert_eq!(32, map.tile_height);
        assert_eq!(2, map.tilesets.len());

        match &map.tilesets[0] {
            TilesetEntry::External { first_gid, source } => {
                assert_eq!(1, *first_gid);
                assert_eq!("levels/collision.tsx", source);
            },
            other => panic!("Expected external tileset, got {other:?}"),
        }
        match &map.tilesets[1] {
            TilesetEntry::Internal { first_gid, tileset } => {
                assert_eq!(5, *first_gid);
                assert_eq!(5, tileset.first_gid);
                assert_eq!("Inline", tileset.name);
                assert_eq!(1, tileset.tiles.len());
            },
            other => panic!("Expected internal tileset, got {other:?}"),
        }
    }

    #[test]
    fn entry_without_first_gid() {
        let doc = Document::parse(r#"<map><tileset source="a.tsx"/></map>"#).unwrap();
        let result = TiledMap::parse_doc(doc, None);
        assert!(matches!(result, Err(LoadError::MissingAttributeError { .. })));
    }
}
