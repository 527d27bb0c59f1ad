use roxmltree::{Document, Node};
use crate::map::{LoadError, Properties};
use crate::HashSet;


/// A mostly 1:1 mapping of the TSX <tileset> element.
/// Image payloads are kept in their transport encoding.
#[derive(Clone, Debug)]
pub struct Tileset {
    pub name: String,
    pub class: String,
    pub first_gid: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: Option<u32>,
    pub columns: u32,
    pub image: Option<Image>,
    pub tiles: Vec<Tile>,
}

impl Default for Tileset {
    fn default() -> Self {
        Self {
            name: Default::default(),
            class: Default::default(),
            first_gid: 1,
            tile_width: Default::default(),
            tile_height: Default::default(),
            tile_count: Default::default(),
            columns: Default::default(),
            image: Default::default(),
            tiles: Default::default(),
        }
    }
}

impl Tileset {

    pub fn parse_doc(doc: Document, parent_path: Option<&str>) -> Result<Self, LoadError> {
        let root = doc.root();
        let tileset_node = root
            .children()
            .find(|node| node.tag_name().name() == "tileset")
            .ok_or(LoadError::MissingTagError { tag_name: String::from("tileset") })?;
        let mut tileset = Tileset::default();
        tileset.parse(tileset_node, parent_path)?;
        Ok(tileset)
    }

    pub fn parse(&mut self, tileset_node: Node, parent_path: Option<&str>) -> Result<(), LoadError> {

        // Parses attributes
        for attribute in tileset_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "name" => self.name = String::from(value),
                "class" => self.class = String::from(value),
                "firstgid" => self.first_gid = value.parse()?,
                "tilewidth" => self.tile_width = value.parse()?,
                "tileheight" => self.tile_height = value.parse()?,
                "tilecount" => self.tile_count = Some(value.parse()?),
                "columns" => self.columns = value.parse()?,
                _ => {}
            }
        }

        // Parses children
        let mut seen_ids = HashSet::default();
        for child in tileset_node.children() {
            match child.tag_name().name() {
                "image" => self.image = Some(Image::parse(child, parent_path)?),
                "tile" => {
                    let tile = Tile::parse(child, parent_path)?;
                    if !seen_ids.insert(tile.id) {
                        return Err(LoadError::DuplicateTileError { tile_id: tile.id });
                    }
                    self.tiles.push(tile);
                },
                _ => {}
            }
        }
        Ok(())
    }
}

/// A <tile> entry of a tileset.
#[derive(Clone, Default, Debug)]
pub struct Tile {
    pub id: u32,
    pub properties: Properties,
    pub image: Option<Image>,
}

impl Tile {
    pub fn parse(tile_node: Node, parent_path: Option<&str>) -> Result<Tile, LoadError> {
        let id: u32 = tile_node
            .attribute("id")
            .ok_or(LoadError::MissingAttributeError {
                tag_name: String::from("tile"),
                attribute: String::from("id"),
            })?
            .parse()?;
        let mut tile = Tile { id, ..Default::default() };
        for child in tile_node.children() {
            match child.tag_name().name() {
                "properties" => parse_properties(child, id, &mut tile.properties)?,
                "image" => tile.image = Some(Image::parse(child, parent_path)?),
                _ => {}
            }
        }
        Ok(tile)
    }
}

/// Adds <property> children to `properties`, rejecting keys that are already present.
/// A tile may carry several <properties> blocks, they all share one key space.
fn parse_properties(properties_node: Node, tile_id: u32, properties: &mut Properties) -> Result<(), LoadError> {
    for property_node in properties_node.children() {
        if property_node.tag_name().name() != "property" {
            continue;
        }
        let name = property_node
            .attribute("name")
            .ok_or(LoadError::MissingAttributeError {
                tag_name: String::from("property"),
                attribute: String::from("name"),
            })?;

        // Multi-line values are stored as element text instead of an attribute
        let value = property_node
            .attribute("value")
            .or_else(|| property_node.text())
            .unwrap_or_default();
        if properties.contains_key(name) {
            return Err(LoadError::DuplicatePropertyError { tile_id, key: String::from(name) });
        }
        properties.insert(String::from(name), String::from(value));
    }
    Ok(())
}

#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Image {
    pub format: String,
    pub source: Option<String>,
    pub data: Option<ImageData>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl Image {
    pub fn parse(image_node: Node, parent_path: Option<&str>) -> Result<Image, LoadError> {
        let mut image = Image::default();
        for attribute in image_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "format" => image.format = String::from(value),
                "source" => {
                    let source = match parent_path {
                        Some(parent) => format!("{parent}/{value}"),
                        None => String::from(value),
                    };
                    image.source = Some(source);
                },
                "width" => image.width = Some(value.parse()?),
                "height" => image.height = Some(value.parse()?),
                _ => {}
            }
        }
        for child in image_node.children() {
            match child.tag_name().name() {
                "data" => image.data = Some(ImageData::parse(child)),
                _ => {}
            }
        }
        Ok(image)
    }
}

/// Embedded, still encoded image payload.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct ImageData {
    pub encoding: Option<String>,
    pub compression: Option<String>,
    pub text: String,
}

impl ImageData {
    fn parse(data_node: Node) -> Self {
        Self {
            encoding: data_node.attribute("encoding").map(String::from),
            compression: data_node.attribute("compression").map(String::from),
            text: String::from(data_node.text().unwrap_or_default()),
        }
    }
}
