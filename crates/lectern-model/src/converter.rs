use lectern_common::error::LecternError;
use lectern_common::types::{ResolvedBlock, Result};
use lectern_logger::log::log;
use lectern_logger::severity::LogSeverity::Warning;
use lectern_nbt::NBTFile;

use crate::resolver::resolve;
use crate::source::StructureSource;

/// Converts a Minecraft structure file into the renderable block list.
///
/// Acquires the raw bytes from `source`, decodes the NBT tag tree in full,
/// then resolves every placement through the palette. Every failure is an
/// explicit `Err`; no partial block list is ever produced.
pub async fn structure_to_models(source: StructureSource) -> Result<Vec<ResolvedBlock>> {
    let bytes = source.load().await?;

    let file = NBTFile::from_bytes(&bytes).map_err(|err| {
        log(format!("Error while parsing NBT data: {}", err), Warning);
        LecternError::DecodeError(err.to_string())
    })?;

    resolve(&file.root).map_err(|err| {
        log(format!("Invalid NBT - {}", err), Warning);
        err
    })
}
