use crate::error::StorageError;
use core_types::{Dataset, Order, Product, ProductDraft, ProductId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// The `JsonStore` provides a high-level interface to the data file.
/// It encapsulates all file access and the read-modify-write cycle of edits.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole dataset.
    ///
    /// A missing, unreadable or malformed file is logged and treated as an empty dataset.
    pub async fn load(&self) -> Dataset {
        match self.read().await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Error reading data file.");
                Dataset::default()
            }
        }
    }

    pub async fn products(&self) -> Vec<Product> {
        self.load().await.products
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.load().await.orders
    }

    /// Replaces the writable fields of an existing product and saves the file.
    pub async fn update_product(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StorageError> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut data = self.read_for_update().await?;

        let product = data
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StorageError::ProductNotFound(id))?;
        product.apply(draft);
        let updated = product.clone();

        self.write(&data).await?;
        tracing::info!(product_id = %id, "Updated product.");
        Ok(updated)
    }

    /// Appends a new product with the next free identifier and saves the file.
    pub async fn create_product(&self, draft: ProductDraft) -> Result<Product, StorageError> {
        draft.validate()?;

        let _guard = self.write_lock.lock().await;
        let mut data = self.read_for_update().await?;

        let product = Product::from_draft(data.next_product_id(), draft);
        data.products.push(product.clone());

        self.write(&data).await?;
        tracing::info!(product_id = %product.id, "Created product.");
        Ok(product)
    }

    async fn read(&self) -> Result<Dataset, StorageError> {
        let raw = tokio::fs::read_to_string(self.path.as_path()).await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Like `read`, but only a missing file counts as empty. A malformed file is an
    /// error here so that an edit never overwrites data it could not parse.
    async fn read_for_update(&self) -> Result<Dataset, StorageError> {
        match self.read().await {
            Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Dataset::default()),
            other => other,
        }
    }

    async fn write(&self, data: &Dataset) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(data)?;

        // Write beside the target and rename so readers never see a half-written file.
        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, self.path.as_path()).await?;
        Ok(())
    }
}
