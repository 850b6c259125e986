//! Storage layer for payplan
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each repository owns one file under the data directory.

pub mod budget;
pub mod file_io;
pub mod items;

pub use budget::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use items::ItemRepository;

use crate::config::paths::PlannerPaths;
use crate::error::PlannerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: PlannerPaths,
    pub items: ItemRepository,
    pub budget: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: PlannerPaths) -> Result<Self, PlannerError> {
        paths.ensure_directories()?;

        Ok(Self {
            items: ItemRepository::new(paths.items_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &PlannerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), PlannerError> {
        self.items.load()?;
        self.budget.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), PlannerError> {
        self.items.save()?;
        self.budget.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.items.count().unwrap(), 0);
        assert_eq!(storage.paths().base_dir(), temp_dir.path());
        assert!(!storage.paths().is_initialized());
    }

    #[test]
    fn test_save_all_and_load_all() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        storage.items.insert(Item::new("Fridge", 900.0, 100.0)).unwrap();
        let mut inputs = storage.budget.get().unwrap();
        inputs.set_income(1000.0);
        storage.budget.set(inputs).unwrap();
        storage.save_all().unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.items.count().unwrap(), 1);
        assert_eq!(reloaded.budget.get().unwrap().income, 1000.0);
    }
}
