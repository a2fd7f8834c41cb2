use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum LecternError {
    IoError(std::io::Error),
    SourceError(String),
    DecodeError(String),
    InvalidShape(String),
    PaletteIndexOutOfRange { index: i64, palette_len: usize },
}

impl fmt::Display for LecternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LecternError::IoError(err) => write!(f, "IO error: {}", err),
            LecternError::SourceError(msg) => write!(f, "Source error: {}", msg),
            LecternError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            LecternError::InvalidShape(msg) => write!(f, "Invalid structure shape: {}", msg),
            LecternError::PaletteIndexOutOfRange { index, palette_len } => write!(
                f,
                "Palette index {} out of range (palette has {} entries)",
                index, palette_len
            ),
        }
    }
}

impl Error for LecternError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LecternError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LecternError {
    fn from(err: std::io::Error) -> Self {
        LecternError::IoError(err)
    }
}
