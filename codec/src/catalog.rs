//! Session catalog established by init packets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CodecResult;
use crate::frame::SENTINEL_ID;

/// Image name the server uses for "nothing to show".
pub const NONE_IMAGE: &str = "none";

/// Id to image-name lookup tables for one session.
///
/// A catalog is replaced wholesale by every init packet; it is never merged
/// or edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Block image id to block texture name.
    #[serde(rename = "block_img_id_to_img")]
    pub blocks: BTreeMap<u8, String>,
    /// Entity id to map-sized mob image name.
    #[serde(rename = "mob_img_id_to_img")]
    pub entities: BTreeMap<u8, String>,
    /// Full-size mob images to preload for the secondary panel.
    #[serde(rename = "mob_images_to_load")]
    pub preload: Vec<String>,
}

/// Category of a catalog image, which decides where it is loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Block,
    MobMap,
    MobFull,
}

/// An image the renderer should load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef<'a> {
    pub name: &'a str,
    pub kind: ImageKind,
}

impl ImageRef<'_> {
    /// Resolves the image to a path under `roots`.
    #[must_use]
    pub fn path(&self, roots: &AssetRoots) -> String {
        let root = match self.kind {
            ImageKind::Block => &roots.blocks,
            ImageKind::MobMap => &roots.mob_map,
            ImageKind::MobFull => &roots.mob_full,
        };
        format!("{root}{}", self.name)
    }
}

/// Directory prefixes for each image category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetRoots {
    pub blocks: String,
    pub mob_map: String,
    pub mob_full: String,
}

impl Default for AssetRoots {
    fn default() -> Self {
        Self {
            blocks: "resources/blocks/".to_string(),
            mob_map: "resources/mobs/map_img/".to_string(),
            mob_full: "resources/mobs/full_img/".to_string(),
        }
    }
}

impl Catalog {
    /// Returns the texture name for a block id, or `None` for the sentinel or an unknown id.
    #[must_use]
    pub fn block_image(&self, id: u8) -> Option<&str> {
        if id == SENTINEL_ID {
            return None;
        }
        self.blocks.get(&id).map(String::as_str)
    }

    /// Returns the map image for an entity id, or `None` for the sentinel, an
    /// unknown id, or an entity without an image.
    #[must_use]
    pub fn entity_image(&self, id: u8) -> Option<&str> {
        if id == SENTINEL_ID {
            return None;
        }
        self.entities
            .get(&id)
            .map(String::as_str)
            .filter(|name| *name != NONE_IMAGE)
    }

    /// Lists every image to preload: mob map images, full mob images, then blocks.
    ///
    /// Mob entries named `none` are placeholders and are skipped.
    #[must_use]
    pub fn images(&self) -> Vec<ImageRef<'_>> {
        let mobs = self
            .entities
            .values()
            .filter(|name| name.as_str() != NONE_IMAGE)
            .map(|name| ImageRef {
                name,
                kind: ImageKind::MobMap,
            });
        let full = self
            .preload
            .iter()
            .filter(|name| name.as_str() != NONE_IMAGE)
            .map(|name| ImageRef {
                name,
                kind: ImageKind::MobFull,
            });
        let blocks = self.blocks.values().map(|name| ImageRef {
            name,
            kind: ImageKind::Block,
        });
        mobs.chain(full).chain(blocks).collect()
    }

    /// Returns `true` if `name` is one of the catalog's images.
    #[must_use]
    pub fn contains_image(&self, name: &str) -> bool {
        self.images().iter().any(|image| image.name == name)
    }

    /// Serializes the catalog to init packet content.
    pub fn to_json(&self) -> CodecResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

/// Decodes init packet content into a fresh catalog.
pub fn decode_catalog(content: &[u8]) -> CodecResult<Catalog> {
    let text = std::str::from_utf8(content)?;
    Ok(serde_json::from_str(text)?)
}

/// Encodes a catalog as init packet content.
pub fn encode_catalog(catalog: &Catalog) -> CodecResult<Vec<u8>> {
    catalog.to_json()
}
