use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, crate::error::LecternError>;

/// One renderable block instance produced by the structure resolver.
///
/// `variant` is the canonical comma-joined `key=value` string (keys sorted),
/// empty when the block has no properties or a special-variant rule applied.
/// `offset` is the block's world-space position in model units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBlock {
    pub blockstate: String,
    pub variant: String,
    pub offset: [i32; 3],
}
