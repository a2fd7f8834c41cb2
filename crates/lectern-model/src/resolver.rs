use lectern_common::error::LecternError;
use lectern_common::types::{ResolvedBlock, Result};
use lectern_nbt::Tag;
use std::collections::HashMap;

use crate::variants::special_variant;

/// Grid-to-world scale: one structure grid unit is 16 model units.
pub const BLOCK_UNIT: i32 = 16;

const NAMESPACE_PREFIX: &str = "minecraft:";
const AIR: &str = "minecraft:air";

/// One palette entry, flattened out of its compound tag.
struct PaletteEntry {
    name: String,
    properties: Option<HashMap<String, String>>,
}

/// Walks a decoded structure-file tag tree and produces the renderable block
/// list, in placement order.
///
/// The root must be a compound holding `palette` and `blocks` lists. Any
/// malformed entry or out-of-range palette index aborts the whole
/// conversion; no partial output is ever returned.
pub fn resolve(root: &Tag) -> Result<Vec<ResolvedBlock>> {
    let compound = root
        .as_compound()
        .ok_or_else(|| LecternError::InvalidShape("root tag should be compound".to_owned()))?;

    let (palette_tags, block_tags) = match (compound.get("palette"), compound.get("blocks")) {
        (Some(palette), Some(blocks)) => {
            let palette = palette.as_list().ok_or_else(|| {
                LecternError::InvalidShape("palette should be a list".to_owned())
            })?;
            let blocks = blocks
                .as_list()
                .ok_or_else(|| LecternError::InvalidShape("blocks should be a list".to_owned()))?;
            (palette, blocks)
        }
        _ => {
            return Err(LecternError::InvalidShape(
                "missing blocks/palette".to_owned(),
            ))
        }
    };

    // Palette order is load-bearing: the index of each entry is the state
    // index placements refer to.
    let palette = read_palette(palette_tags)?;

    let mut models = Vec::new();
    for block in block_tags {
        let state = block
            .get("state")
            .and_then(Tag::as_i32)
            .ok_or_else(|| LecternError::InvalidShape("placement has no state index".to_owned()))?;

        let entry = usize::try_from(state)
            .ok()
            .and_then(|index| palette.get(index))
            .ok_or(LecternError::PaletteIndexOutOfRange {
                index: i64::from(state),
                palette_len: palette.len(),
            })?;

        if entry.name == AIR {
            // No need to add air
            continue;
        }

        let block_type = entry.name.strip_prefix(NAMESPACE_PREFIX).ok_or_else(|| {
            LecternError::InvalidShape(format!(
                "palette entry {} is outside the {} namespace",
                entry.name, NAMESPACE_PREFIX
            ))
        })?;

        let mut blockstate = block_type.to_owned();
        let mut variant = variant_string(entry.properties.as_ref());

        if let Some(rule) = special_variant(block_type) {
            let no_properties = HashMap::new();
            blockstate = rule(entry.properties.as_ref().unwrap_or(&no_properties))?;
            variant = String::new();
        }

        models.push(ResolvedBlock {
            blockstate,
            variant,
            offset: read_offset(block)?,
        });
    }

    Ok(models)
}

fn read_palette(entries: &[Tag]) -> Result<Vec<PaletteEntry>> {
    let mut palette = Vec::with_capacity(entries.len());
    for entry in entries {
        let compound = entry.as_compound().ok_or_else(|| {
            LecternError::InvalidShape("palette entry should be compound".to_owned())
        })?;

        let name = compound
            .get("Name")
            .and_then(Tag::as_string)
            .ok_or_else(|| LecternError::InvalidShape("palette entry has no Name".to_owned()))?
            .clone();

        let properties = match compound.get("Properties") {
            Some(tag) => {
                let props = tag.as_compound().ok_or_else(|| {
                    LecternError::InvalidShape("Properties should be compound".to_owned())
                })?;
                let mut map = HashMap::with_capacity(props.len());
                for (key, value) in props {
                    let value = value.as_string().ok_or_else(|| {
                        LecternError::InvalidShape(format!("property {} is not a string", key))
                    })?;
                    map.insert(key.clone(), value.clone());
                }
                Some(map)
            }
            None => None,
        };

        palette.push(PaletteEntry { name, properties });
    }
    Ok(palette)
}

/// Canonical variant string: `key=value` pairs sorted lexicographically and
/// comma-joined, so the result matches the renderer's own canonical form
/// regardless of source property order.
fn variant_string(properties: Option<&HashMap<String, String>>) -> String {
    let properties = match properties {
        Some(properties) => properties,
        None => return String::new(),
    };

    let mut pairs: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect();
    pairs.sort();
    pairs.join(",")
}

fn read_offset(block: &Tag) -> Result<[i32; 3]> {
    let pos = block
        .get("pos")
        .and_then(Tag::as_list)
        .ok_or_else(|| LecternError::InvalidShape("placement has no pos list".to_owned()))?;
    if pos.len() != 3 {
        return Err(LecternError::InvalidShape(format!(
            "pos should have 3 elements, found {}",
            pos.len()
        )));
    }

    let mut offset = [0i32; 3];
    for (slot, tag) in offset.iter_mut().zip(pos) {
        let component = tag
            .as_i32()
            .ok_or_else(|| LecternError::InvalidShape("pos element is not an int".to_owned()))?;
        *slot = component * BLOCK_UNIT;
    }
    Ok(offset)
}
