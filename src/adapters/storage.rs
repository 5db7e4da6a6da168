use crate::domain::ports::AssetStorage;
use crate::utils::error::{EmsError, Result};
use std::path::Path;

/// Reads assets from a local directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl AssetStorage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        tokio::fs::read(&full_path)
            .await
            .map_err(|source| EmsError::AssetError {
                path: full_path.display().to_string(),
                source,
            })
    }
}
