//! Budget inputs repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::PlannerError;
use crate::models::BudgetInputs;

use super::file_io::{read_json, write_json_atomic};

pub struct BudgetRepository {
    path: PathBuf,
    inputs: RwLock<BudgetInputs>,
}

impl BudgetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            inputs: RwLock::new(BudgetInputs::default()),
        }
    }

    pub fn load(&self) -> Result<(), PlannerError> {
        let loaded: BudgetInputs = read_json(&self.path)?;
        self.set(loaded.sanitized())
    }

    pub fn save(&self) -> Result<(), PlannerError> {
        let inputs = self.get()?;
        write_json_atomic(&self.path, &inputs)?;
        tracing::debug!("budget inputs saved");
        Ok(())
    }

    pub fn get(&self) -> Result<BudgetInputs, PlannerError> {
        let inputs = self
            .inputs
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(inputs.clone())
    }

    pub fn set(&self, value: BudgetInputs) -> Result<(), PlannerError> {
        let mut inputs = self
            .inputs
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *inputs = value;
        Ok(())
    }
}
