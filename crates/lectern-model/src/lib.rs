pub mod converter;
pub mod resolver;
pub mod source;
pub mod variants;

pub use converter::structure_to_models;
pub use lectern_common::types::ResolvedBlock;
pub use source::StructureSource;
