//! Item repository for JSON storage
//!
//! Items are kept in insertion order. Strategy tie-breaking and the order of
//! equal-split results follow that order, so it is preserved on disk too.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::{Item, ItemId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ItemData {
    #[serde(default)]
    items: Vec<Item>,
}

pub struct ItemRepository {
    path: PathBuf,
    items: RwLock<Vec<Item>>,
}

impl ItemRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Item>>, PlannerError> {
        self.items
            .read()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Item>>, PlannerError> {
        self.items
            .write()
            .map_err(|e| PlannerError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    pub fn load(&self) -> Result<(), PlannerError> {
        let file_data: ItemData = read_json(&self.path)?;
        tracing::debug!(count = file_data.items.len(), "items loaded");
        *self.write()? = file_data.items;
        Ok(())
    }

    pub fn save(&self) -> Result<(), PlannerError> {
        let file_data = ItemData {
            items: self.read()?.clone(),
        };
        write_json_atomic(&self.path, &file_data)?;
        tracing::debug!(count = file_data.items.len(), "items saved");
        Ok(())
    }

    pub fn get(&self, id: ItemId) -> Result<Option<Item>, PlannerError> {
        Ok(self.read()?.iter().find(|item| item.id == id).cloned())
    }

    /// Snapshot of every item, in insertion order
    pub fn get_all(&self) -> Result<Vec<Item>, PlannerError> {
        Ok(self.read()?.clone())
    }

    /// Items whose name matches case-insensitively (names need not be unique)
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Item>, PlannerError> {
        let needle = name.trim().to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|item| item.name.trim().to_lowercase() == needle)
            .cloned()
            .collect())
    }

    /// Items whose id starts with `prefix` (display prefix optional)
    pub fn find_by_id_prefix(&self, prefix: &str) -> Result<Vec<Item>, PlannerError> {
        Ok(self
            .read()?
            .iter()
            .filter(|item| item.id.matches_prefix(prefix))
            .cloned()
            .collect())
    }

    /// Append a new item
    pub fn insert(&self, item: Item) -> Result<(), PlannerError> {
        let mut items = self.write()?;
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(PlannerError::Storage(format!(
                "Item {} already exists",
                item.id
            )));
        }
        items.push(item);
        Ok(())
    }

    /// Replace the item with the same id in place; false if absent
    pub fn replace(&self, item: Item) -> Result<bool, PlannerError> {
        let mut items = self.write()?;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(slot) => {
                *slot = item;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn delete(&self, id: ItemId) -> Result<bool, PlannerError> {
        let mut items = self.write()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        Ok(items.len() != before)
    }

    pub fn count(&self) -> Result<usize, PlannerError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repo() -> (TempDir, ItemRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ItemRepository::new(temp_dir.path().join("items.json"));
        (temp_dir, repo)
    }

    #[test]
    fn test_insert_preserves_order() {
        let (_temp_dir, repo) = repo();
        repo.insert(Item::new("B", 10.0, 0.0)).unwrap();
        repo.insert(Item::new("A", 20.0, 0.0)).unwrap();
        repo.insert(Item::new("C", 5.0, 0.0)).unwrap();

        let names: Vec<_> = repo.get_all().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_save_and_reload_keeps_order() {
        let (temp_dir, repo) = repo();
        let first = Item::new("Second-hand car", 4000.0, 500.0);
        let second = Item::new("Couch", 700.0, 0.0);
        repo.insert(first.clone()).unwrap();
        repo.insert(second.clone()).unwrap();
        repo.save().unwrap();

        let reloaded = ItemRepository::new(temp_dir.path().join("items.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_insert_duplicate_id_fails() {
        let (_temp_dir, repo) = repo();
        let item = Item::new("A", 10.0, 0.0);
        repo.insert(item.clone()).unwrap();
        assert!(repo.insert(item).is_err());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_replace_in_place() {
        let (_temp_dir, repo) = repo();
        let a = Item::new("A", 10.0, 0.0);
        let b = Item::new("B", 10.0, 0.0);
        repo.insert(a.clone()).unwrap();
        repo.insert(b).unwrap();

        let mut edited = a.clone();
        edited.paid = 4.0;
        assert!(repo.replace(edited).unwrap());

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[0].paid, 4.0);

        assert!(!repo.replace(Item::new("ghost", 1.0, 0.0)).unwrap());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, repo) = repo();
        let item = Item::new("A", 10.0, 0.0);
        repo.insert(item.clone()).unwrap();

        assert!(repo.delete(item.id).unwrap());
        assert!(!repo.delete(item.id).unwrap());
        assert!(repo.get(item.id).unwrap().is_none());
    }

    #[test]
    fn test_find_by_name_and_prefix() {
        let (_temp_dir, repo) = repo();
        let item = Item::new("Laptop", 1500.0, 0.0);
        repo.insert(item.clone()).unwrap();
        repo.insert(Item::new("Phone", 600.0, 0.0)).unwrap();

        assert_eq!(repo.find_by_name("  laptop ").unwrap(), vec![item.clone()]);
        assert!(repo.find_by_name("tablet").unwrap().is_empty());

        let display = item.id.to_string();
        assert_eq!(repo.find_by_id_prefix(&display).unwrap(), vec![item]);
    }
}
