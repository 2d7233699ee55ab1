use super::DataStore;
use crate::error::{FactzError, Result};
use crate::facts::FactList;
use crate::model::Fact;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for tests.
///
/// Files are fact lists keyed by path. A path that was never created reads
/// as "not found", like a missing file would.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, FactList>,
    corrupt: HashSet<PathBuf>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `path` with the given facts.
    pub fn with_facts<I>(mut self, path: impl Into<PathBuf>, facts: I) -> Self
    where
        I: IntoIterator<Item = Fact>,
    {
        self.files.insert(path.into(), facts.into_iter().collect());
        self
    }

    /// Makes every later read or append of `path` fail as if the file were malformed.
    pub fn mark_corrupt(&mut self, path: impl Into<PathBuf>) {
        self.corrupt.insert(path.into());
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    fn check_readable(&self, path: &Path) -> Result<&FactList> {
        if self.corrupt.contains(path) {
            return Err(FactzError::parse(path, "simulated malformed document"));
        }
        self.files.get(path).ok_or_else(|| {
            FactzError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }
}

impl DataStore for InMemoryStore {
    fn load(&self, path: &Path) -> Result<FactList> {
        self.check_readable(path).cloned()
    }

    fn append(&mut self, path: &Path, fact: &Fact) -> Result<()> {
        self.check_readable(path)?;
        if self.simulate_write_error {
            return Err(FactzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        if let Some(facts) = self.files.get_mut(path) {
            facts.add(fact.clone());
        }
        Ok(())
    }

    fn create(&mut self, path: &Path) -> Result<bool> {
        if self.files.contains_key(path) {
            return Ok(false);
        }
        if self.simulate_write_error {
            return Err(FactzError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated write error",
            )));
        }
        self.files.insert(path.to_path_buf(), FactList::new());
        Ok(true)
    }
}
