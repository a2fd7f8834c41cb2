pub mod error;
pub mod types;

pub use error::LecternError;
pub use types::{ResolvedBlock, Result};
