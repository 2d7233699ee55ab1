//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between fact logic and persistence.
//! Every call names the file it works on; stores hold no default path.
//!
//! ## Implementations
//!
//! - [`xml::XmlStore`]: production storage, one XML document per fact file.
//!   Appends rewrite the whole file through a temporary sibling and a rename.
//! - [`memory::InMemoryStore`]: keeps fact lists in a map keyed by path.
//!   Used by command and API tests; can simulate unreadable and unwritable files.
//!
//! ## Failure contract
//!
//! A failed `append` leaves the stored facts untouched. Callers that need the
//! in-memory list to match the file must `load` again afterwards.

use crate::error::Result;
use crate::facts::FactList;
use crate::model::Fact;
use std::path::Path;

pub mod memory;
pub mod xml;

pub trait DataStore {
    /// Read every fact stored at `path`.
    fn load(&self, path: &Path) -> Result<FactList>;

    /// Append one fact after the ones already stored at `path`.
    /// `path` must already exist.
    fn append(&mut self, path: &Path, fact: &Fact) -> Result<()>;

    /// Create an empty fact file at `path`. Returns `false` if one already exists.
    fn create(&mut self, path: &Path) -> Result<bool>;
}
