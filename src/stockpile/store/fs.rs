use super::{format, CatalogStore, Loaded};
use crate::error::{Result, StockError};
use crate::model::Catalog;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Catalog persisted as a single comma-separated file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "catalog".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Loaded> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "catalog file not found");
                return Ok(Loaded::missing());
            }
            Err(e) => return Err(StockError::Io(e)),
        };

        let catalog = format::parse(&text)?;
        tracing::debug!(path = %self.path.display(), products = catalog.len(), "catalog loaded");
        Ok(Loaded::existing(catalog))
    }

    fn save(&mut self, catalog: &Catalog) -> Result<()> {
        self.ensure_parent()?;

        // The old file stays intact until the rename.
        let tmp = self.tmp_path();
        fs::write(&tmp, format::render(catalog)).map_err(StockError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StockError::Io(e));
        }

        tracing::debug!(path = %self.path.display(), products = catalog.len(), "catalog saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
