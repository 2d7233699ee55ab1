//! # API Facade
//!
//! [`FactzApi`] is the single entry point for presentation layers. It owns the
//! in-memory [`FactList`], the "current fact" slot and the random source, and
//! dispatches every operation to the command layer.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to `commands/*.rs`, where the logic lives
//! - **Owns state**: the fact list is never handed out mutably
//! - **Publishes** the current fact to registered watchers whenever it changes
//!
//! ## What the API Does NOT Do
//!
//! - **I/O to the terminal**: results are returned as [`CmdResult`]
//! - **Hold a default path**: every load and save names its file
//!
//! ## Generic Over DataStore and Rng
//!
//! `FactzApi<S: DataStore, R: Rng>`:
//! - Production: `FactzApi<XmlStore>` with an entropy-seeded `StdRng`
//! - Testing: `FactzApi<InMemoryStore, StdRng>` with a fixed seed, so random
//!   picks are reproducible

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::facts::FactList;
use crate::model::{CurrentFact, SearchMode};
use crate::store::DataStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;
use tracing::{info, warn};

type Watcher = Box<dyn FnMut(&CurrentFact)>;

/// The main API facade for factz operations.
pub struct FactzApi<S: DataStore, R: Rng = StdRng> {
    store: S,
    facts: FactList,
    current: CurrentFact,
    rng: R,
    watchers: Vec<Watcher>,
}

impl<S: DataStore> FactzApi<S, StdRng> {
    pub fn new(store: S) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }
}

impl<S: DataStore, R: Rng> FactzApi<S, R> {
    pub fn with_rng(store: S, rng: R) -> Self {
        Self {
            store,
            facts: FactList::new(),
            current: CurrentFact::Nothing,
            rng,
            watchers: Vec::new(),
        }
    }

    /// Replaces the in-memory facts with the contents of `path`.
    /// The previous facts are kept if the file cannot be read.
    pub fn load_facts(&mut self, path: &Path) -> Result<CmdResult> {
        match commands::load::run(&self.store, &mut self.facts, path) {
            Ok(result) => {
                info!(path = %path.display(), count = self.facts.len(), "facts loaded");
                Ok(result)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load facts");
                Err(e)
            }
        }
    }

    /// Adds the facts of `path` to the in-memory list and shows one at random.
    pub fn merge_facts(&mut self, path: &Path) -> Result<CmdResult> {
        let mut result = commands::load::merge(&self.store, &mut self.facts, path)?;
        let picked = commands::random::run(&self.facts, &mut self.rng);
        result.current = picked.current;
        self.publish(&result);
        Ok(result)
    }

    pub fn next_random(&mut self) -> CmdResult {
        let result = commands::random::run(&self.facts, &mut self.rng);
        self.publish(&result);
        result
    }

    /// Validates and appends a new fact to `path`, then reloads from it.
    ///
    /// Blank fields are reported through `CmdResult::status`; only storage
    /// failures are errors.
    pub fn add_fact(
        &mut self,
        path: &Path,
        author: &str,
        fact_type: &str,
        text: &str,
    ) -> Result<CmdResult> {
        let result =
            commands::add::run(&mut self.store, &mut self.facts, path, author, fact_type, text)?;
        if result.status == Some(commands::NewFactStatus::Saved) {
            info!(path = %path.display(), count = self.facts.len(), "fact saved");
        }
        Ok(result)
    }

    /// The prompt shown before any field of a new fact is filled in.
    pub fn add_prompt(&self) -> CmdResult {
        commands::add::prompt()
    }

    pub fn search(&mut self, term: &str, mode: SearchMode) -> CmdResult {
        let result = commands::search::run(&self.facts, term, mode, &mut self.rng);
        self.publish(&result);
        result
    }

    pub fn list_facts(&self) -> CmdResult {
        commands::list::run(&self.facts)
    }

    pub fn init(&mut self, path: &Path) -> Result<CmdResult> {
        commands::init::run(&mut self.store, path)
    }

    pub fn config(&self, config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(config_dir, action)
    }

    pub fn current(&self) -> &CurrentFact {
        &self.current
    }

    pub fn facts(&self) -> &FactList {
        &self.facts
    }

    /// Registers a callback run with the new current fact every time it changes.
    pub fn watch<F>(&mut self, watcher: F)
    where
        F: FnMut(&CurrentFact) + 'static,
    {
        self.watchers.push(Box::new(watcher));
    }

    fn publish(&mut self, result: &CmdResult) {
        if let Some(current) = &result.current {
            self.current = current.clone();
            for watcher in self.watchers.iter_mut() {
                watcher(&self.current);
            }
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, MessageLevel, NewFactStatus};
