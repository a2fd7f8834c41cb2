use lectern_common::error::LecternError;
use lectern_common::types::Result;
use std::path::PathBuf;

/// Where the raw structure bytes come from. Exactly one source kind per
/// conversion.
#[derive(Debug, Clone)]
pub enum StructureSource {
    /// Raw NBT data already in memory.
    Raw(Vec<u8>),
    /// A structure file on the local filesystem.
    File(PathBuf),
    /// A structure file fetched over HTTP.
    Url(String),
}

impl StructureSource {
    /// Produces the raw byte buffer for this source. Raw bytes resolve
    /// immediately but share the async surface with the I/O-backed kinds.
    pub async fn load(&self) -> Result<Vec<u8>> {
        match self {
            StructureSource::Raw(bytes) => Ok(bytes.clone()),
            StructureSource::File(path) => Ok(tokio::fs::read(path).await?),
            StructureSource::Url(url) => {
                let response = reqwest::get(url).await.map_err(|err| {
                    LecternError::SourceError(format!("Failed to fetch {}: {}", url, err))
                })?;
                if !response.status().is_success() {
                    return Err(LecternError::SourceError(format!(
                        "Fetching {} returned status {}",
                        url,
                        response.status()
                    )));
                }
                let body = response.bytes().await.map_err(|err| {
                    LecternError::SourceError(format!("Failed to read body of {}: {}", url, err))
                })?;
                Ok(body.to_vec())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_raw_source_resolves_to_its_bytes() {
        let source = StructureSource::Raw(vec![1, 2, 3]);
        let bytes = tokio_test::block_on(source.load()).unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_file_source_reads_file() {
        let path = std::env::temp_dir().join("lectern_source_test.nbt");
        std::fs::write(&path, [0x0a, 0x00, 0x00, 0x00]).unwrap();

        let source = StructureSource::File(path.clone());
        let bytes = tokio_test::block_on(source.load()).unwrap();
        assert_eq!(bytes, vec![0x0a, 0x00, 0x00, 0x00]);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = StructureSource::File(std::env::temp_dir().join("lectern_no_such_file.nbt"));
        let result = tokio_test::block_on(source.load());
        assert_matches!(result, Err(LecternError::IoError(_)));
    }
}
