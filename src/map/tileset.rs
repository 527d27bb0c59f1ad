use std::path::Path;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use rayon::prelude::*;
use roxmltree::Document;
use crate::map::{parse, Gid, LoadError, TileImage, TileRecord};
use crate::LoaderConfig;

/// Loader for a .tsx file.
/// Outputs a [`Tileset`].
#[derive(Clone, Default, Debug)]
pub struct TsxLoader {
    pub config: LoaderConfig,
}

impl TsxLoader {

    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn load(&self, bytes: &[u8], parent_path: Option<&str>) -> Result<Tileset, LoadError> {
        let xml_source = std::str::from_utf8(bytes)?;
        let xml_doc = Document::parse(xml_source)?;
        let parsed_tileset = parse::Tileset::parse_doc(xml_doc, parent_path)?;
        Tileset::from_parsed(parsed_tileset, &self.config)
    }

    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Tileset, LoadError> {
        let path = path.as_ref();
        log::debug!("Loading tileset {}", path.display());
        let bytes = std::fs::read(path)?;
        let parent = path.parent().and_then(Path::to_str).filter(|parent| !parent.is_empty());
        self.load(&bytes, parent)
    }

    pub fn extensions(&self) -> &[&str] {
        &["tsx"]
    }
}

/// A processed version of [`parse::Tileset`] such that images are decoded.
#[derive(Clone, Default, Debug)]
pub struct Tileset {
    pub name: String,
    pub first_gid: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub tile_count: Option<u32>,
    pub image: Option<TileImage>,
    /// Tiles in declaration order. Ids are preserved, not re-indexed.
    pub tiles: Vec<TileRecord>,
}

impl Tileset {

    /// Decodes every image payload of the parsed tileset.
    /// A single bad payload fails the whole tileset.
    pub fn from_parsed(parsed_tileset: parse::Tileset, config: &LoaderConfig) -> Result<Self, LoadError> {
        let decode_tile = |tile: parse::Tile| -> Result<TileRecord, LoadError> {
            let image = match tile.image {
                Some(image) => {
                    let image = decode_image(image)
                        .map_err(|reason| LoadError::DecodeError { tile_id: tile.id, reason })?;
                    Some(image)
                },
                None => None,
            };
            Ok(TileRecord {
                local_id: tile.id,
                image,
                properties: tile.properties,
            })
        };

        // Results are gathered in declaration order first so that the reported error is the earliest one.
        let results: Vec<Result<TileRecord, LoadError>> = if config.parallel {
            parsed_tileset.tiles.into_par_iter().map(decode_tile).collect()
        }
        else {
            parsed_tileset.tiles.into_iter().map(decode_tile).collect()
        };
        let tiles = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        let image = match parsed_tileset.image {
            Some(image) => {
                let image = decode_image(image)
                    .map_err(|reason| LoadError::TilesetImageDecodeError { reason })?;
                Some(image)
            },
            None => None,
        };

        log::debug!("Decoded tileset '{}' with {} tiles", parsed_tileset.name, tiles.len());
        let tileset = Self {
            name: parsed_tileset.name,
            first_gid: parsed_tileset.first_gid,
            tile_width: parsed_tileset.tile_width,
            tile_height: parsed_tileset.tile_height,
            tile_count: parsed_tileset.tile_count,
            image,
            tiles,
        };
        tileset.check_gids()?;
        Ok(tileset)
    }

    /// Global id of a local tile id.
    /// None when the sum overflows, lands on the empty gid or reaches the flag bits.
    pub fn gid_of(&self, local_id: u32) -> Option<Gid> {
        self.first_gid
            .checked_add(local_id)
            .map(Gid)
            .filter(|gid| !gid.is_empty() && *gid <= Gid::MAX)
    }

    /// Ensures every declared tile and every atlas tile has a resolvable gid.
    pub fn check_gids(&self) -> Result<(), LoadError> {
        if Gid(self.first_gid).is_empty() {
            return Err(LoadError::ZeroFirstGidError);
        }
        let last_atlas_id = self.tile_count.and_then(|tile_count| tile_count.checked_sub(1));
        let local_ids = self.tiles
            .iter()
            .map(|tile| tile.local_id)
            .chain(last_atlas_id);
        for local_id in local_ids {
            if self.gid_of(local_id).is_none() {
                return Err(LoadError::GidRangeError { tile_id: local_id, first_gid: self.first_gid });
            }
        }
        Ok(())
    }

    pub fn tile(&self, local_id: u32) -> Option<&TileRecord> {
        self.tiles.iter().find(|tile| tile.local_id == local_id)
    }
}

/// Decodes an embedded image, or keeps the source of an external one.
/// Errors are the reason only, the caller names the image that failed.
fn decode_image(image: parse::Image) -> Result<TileImage, String> {
    let Some(data) = image.data else {
        return match image.source {
            Some(source) => Ok(TileImage::External { source }),
            None => Err(String::from("image has neither data nor source")),
        };
    };

    match data.encoding.as_deref() {
        Some("base64") => {},
        Some(encoding) => return Err(format!("unsupported encoding '{encoding}'")),
        None => return Err(String::from("missing encoding")),
    }
    if let Some(compression) = data.compression {
        return Err(format!("unsupported compression '{compression}'"));
    }
    let format = ImageFormat::from_extension(&image.format)
        .ok_or_else(|| format!("unknown image format '{}'", image.format))?;

    let text: String = data.text.split_ascii_whitespace().collect();
    let bytes = STANDARD
        .decode(text)
        .map_err(|err| err.to_string())?;

    // Signature must match the declared format
    match image::guess_format(&bytes) {
        Ok(actual) if actual == format => {},
        Ok(actual) => return Err(format!("expected {format:?} data, found {actual:?}")),
        Err(_) => return Err(format!("data does not start with a {format:?} signature")),
    }
    Ok(TileImage::Embedded { format, bytes })
}
