use crate::domain::messages::{FileUploadRequest, MediaDbRequest};
use crate::domain::ports::{AssetStorage, EmsService};
use crate::utils::error::Result;
use uuid::Uuid;

/// Uploads demo images into one folder of the eMS media database.
pub struct MediaUploader<'a, E: EmsService, S: AssetStorage> {
    service: &'a E,
    storage: &'a S,
    mdb_path: &'a str,
}

impl<'a, E: EmsService, S: AssetStorage> MediaUploader<'a, E, S> {
    pub fn new(service: &'a E, storage: &'a S, mdb_path: &'a str) -> Self {
        Self {
            service,
            storage,
            mdb_path,
        }
    }

    /// Returns the id of `file_name` in the media database, uploading
    /// `asset_path` only when no file with that exact name exists yet.
    ///
    /// A null upload response yields the nil id.
    pub async fn upload_file(&self, asset_path: &str, file_name: &str) -> Result<Uuid> {
        let existing = self
            .service
            .get_mdb_files(MediaDbRequest {
                path: self.mdb_path.to_string(),
            })
            .await?;

        if let Some(file) = existing
            .iter()
            .flat_map(|response| response.files.iter())
            .find(|file| file.name == file_name)
        {
            tracing::debug!("🖼️ {} already in media database ({})", file_name, file.id);
            return Ok(file.id);
        }

        let bytes = self.storage.read_file(asset_path).await?;
        tracing::info!(
            "🖼️ Uploading {} ({} bytes) to {}",
            file_name,
            bytes.len(),
            self.mdb_path
        );

        let response = self
            .service
            .upload_file_to_mdb(FileUploadRequest {
                file: bytes,
                name: file_name.to_string(),
                path: self.mdb_path.to_string(),
            })
            .await?;

        Ok(response.map(|r| r.file_id).unwrap_or_else(Uuid::nil))
    }
}
