use super::DataStore;
use crate::codec::{self, XmlNode};
use crate::error::{FactzError, Result};
use crate::facts::FactList;
use crate::model::Fact;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// Fact files stored as XML documents on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlStore;

impl XmlStore {
    pub fn new() -> Self {
        Self
    }

    fn empty_document() -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><{}/>",
            XmlNode::FactList.name()
        )
    }

    /// Reads the whole file. Bytes that are not UTF-8 are a parse error.
    fn read_document(path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).map_err(|e| FactzError::parse(path, e))
    }

    /// Writes `content` next to `target` first, then renames it into place.
    fn write_atomic(target: &Path, content: &str) -> Result<()> {
        let dir = target
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let tmp_path = dir.join(format!(".facts-{}.tmp", Uuid::new_v4()));

        fs::write(&tmp_path, content)?;
        if let Err(e) = fs::rename(&tmp_path, target) {
            let _ = fs::remove_file(&tmp_path);
            return Err(FactzError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for XmlStore {
    fn load(&self, path: &Path) -> Result<FactList> {
        let document = Self::read_document(path)?;
        let facts = codec::decode(&document).map_err(|e| FactzError::parse(path, e))?;
        debug!(path = %path.display(), count = facts.len(), "loaded fact file");
        Ok(facts)
    }

    fn append(&mut self, path: &Path, fact: &Fact) -> Result<()> {
        let document = Self::read_document(path)?;
        let updated = codec::append(&document, fact).map_err(|e| FactzError::parse(path, e))?;
        Self::write_atomic(path, &updated)?;
        debug!(path = %path.display(), "saved fact file");
        Ok(())
    }

    fn create(&mut self, path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        Self::write_atomic(path, &Self::empty_document())?;
        Ok(true)
    }
}
