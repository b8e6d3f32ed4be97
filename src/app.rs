// app.rs

use crate::error::Result;
use crate::objective::Objective;
use crate::storage::{self, StorageConfig};
use std::path::Path;

/// Owns the objective collection and the storage defaults for the lifetime
/// of the process. Commands mutate it through `&mut` borrows, one at a time.
pub struct App {
    pub objectives: Vec<Objective>,
    pub storage: StorageConfig,
}

impl App {
    pub fn new(storage: StorageConfig) -> Self {
        Self {
            objectives: Vec::new(),
            storage,
        }
    }

    pub fn add_objective(&mut self, objective: Objective) {
        self.objectives.push(objective);
    }

    pub fn render_all(&mut self) -> String {
        self.objectives.iter_mut().map(|obj| obj.render()).collect()
    }

    pub fn save(&mut self, explicit: Option<&Path>) -> Result<()> {
        let path = self.storage.resolve_path(explicit);
        storage::save_objectives(&mut self.objectives, &path)
    }

    pub fn load_default(&mut self) -> Result<()> {
        let path = self.storage.resolve_path(None);
        self.objectives = storage::load_objectives(&path)?;
        Ok(())
    }
}
