//! Item service
//!
//! Business logic for savings goals and debts: creation with validation,
//! lookup by name or id, partial edits and removal.

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Item, ItemId, ItemPatch};
use crate::storage::Storage;

/// Service for item management
pub struct ItemService<'a> {
    storage: &'a Storage,
}

impl<'a> ItemService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new item
    ///
    /// The name is trimmed; the amount must be positive and `paid` must lie
    /// in `0..=amount`.
    pub fn create(&self, name: &str, amount: f64, paid: f64) -> PlannerResult<Item> {
        let item = Item::new(name.trim(), amount, paid);

        item.validate_new()
            .map_err(|e| PlannerError::Validation(e.to_string()))?;

        self.storage.items.insert(item.clone())?;
        self.storage.items.save()?;

        tracing::info!(id = %item.id, name = %item.name, amount, paid, "item created");
        Ok(item)
    }

    pub fn get(&self, id: ItemId) -> PlannerResult<Option<Item>> {
        self.storage.items.get(id)
    }

    /// All items in insertion order
    pub fn list(&self) -> PlannerResult<Vec<Item>> {
        self.storage.items.get_all()
    }

    /// Find an item by name or id
    ///
    /// Names are matched case-insensitively first, then ids by prefix
    /// (`itm-1a2b3c4d`, a bare UUID or any unique leading part of one).
    pub fn find(&self, identifier: &str) -> PlannerResult<Option<Item>> {
        let by_name = self.storage.items.find_by_name(identifier)?;
        if let Some(item) = single(by_name, identifier)? {
            return Ok(Some(item));
        }

        let by_id = self.storage.items.find_by_id_prefix(identifier)?;
        single(by_id, identifier)
    }

    /// Like [`ItemService::find`], but a missing item is an error
    pub fn resolve(&self, identifier: &str) -> PlannerResult<Item> {
        self.find(identifier)?
            .ok_or_else(|| PlannerError::item_not_found(identifier))
    }

    /// Replace the fields present in `patch`
    ///
    /// Edits are not re-validated against the creation rules, so an edit may
    /// leave `paid` above `amount`.
    pub fn update(&self, id: ItemId, patch: &ItemPatch) -> PlannerResult<Item> {
        let mut item = self
            .get(id)?
            .ok_or_else(|| PlannerError::item_not_found(id.to_string()))?;

        let mut patch = patch.clone();
        patch.name = patch.name.map(|name| name.trim().to_string());
        item.apply(&patch);

        self.storage.items.replace(item.clone())?;
        self.storage.items.save()?;

        if item.paid > item.amount {
            tracing::warn!(id = %item.id, paid = item.paid, amount = item.amount, "item is over-paid");
        }
        tracing::info!(id = %item.id, name = %item.name, "item updated");
        Ok(item)
    }

    /// Remove an item, returning it
    pub fn remove(&self, id: ItemId) -> PlannerResult<Item> {
        let item = self
            .get(id)?
            .ok_or_else(|| PlannerError::item_not_found(id.to_string()))?;

        self.storage.items.delete(id)?;
        self.storage.items.save()?;

        tracing::info!(id = %item.id, name = %item.name, "item removed");
        Ok(item)
    }
}

fn single(mut matches: Vec<Item>, identifier: &str) -> PlannerResult<Option<Item>> {
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(PlannerError::Ambiguous {
            entity_type: "Item",
            identifier: identifier.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::PlannerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let item = service.create("  Television  ", 900.0, 150.0).unwrap();

        assert_eq!(item.name, "Television");
        assert_eq!(item.amount, 900.0);
        assert_eq!(item.paid, 150.0);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_create_persists() {
        let (temp_dir, storage) = create_test_storage();
        ItemService::new(&storage).create("Bike", 300.0, 0.0).unwrap();

        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.items.count().unwrap(), 1);
    }

    #[test]
    fn test_create_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let cases = [
            ("", 100.0, 0.0, "Item name is required"),
            ("Car", 0.0, 0.0, "Total amount must be greater than 0"),
            ("Car", 100.0, -5.0, "Paid amount cannot be negative"),
            ("Car", 100.0, 150.0, "Paid amount cannot exceed the total amount"),
        ];

        for (name, amount, paid, message) in cases {
            let err = service.create(name, amount, paid).unwrap_err();
            assert!(err.is_validation());
            assert!(err.to_string().contains(message), "{}", err);
        }
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let created = service.create("Vacation", 2000.0, 0.0).unwrap();

        let by_name = service.find("vacation").unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        let by_id = service.find(&created.id.to_string()).unwrap().unwrap();
        assert_eq!(by_id.id, created.id);

        let by_uuid = service
            .find(&created.id.as_uuid().to_string())
            .unwrap()
            .unwrap();
        assert_eq!(by_uuid.id, created.id);

        assert!(service.find("missing").unwrap().is_none());
        assert!(service.resolve("missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_names_are_ambiguous() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        service.create("Gift", 50.0, 0.0).unwrap();
        service.create("gift", 80.0, 0.0).unwrap();

        let result = service.find("Gift");
        assert!(matches!(result, Err(PlannerError::Ambiguous { .. })));
    }

    #[test]
    fn test_update_is_partial_and_not_revalidated() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let created = service.create("Loan", 1000.0, 200.0).unwrap();
        let updated = service
            .update(
                created.id,
                &ItemPatch {
                    paid: Some(1200.0),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Loan");
        assert_eq!(updated.amount, 1000.0);
        assert_eq!(updated.paid, 1200.0);
        assert!(!updated.needs_payment());
    }

    #[test]
    fn test_update_with_negative_paid_never_over_allocates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let created = service.create("Phone", 50.0, 0.0).unwrap();
        let updated = service
            .update(
                created.id,
                &ItemPatch {
                    paid: Some(-20.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.paid, 0.0);

        let items = service.list().unwrap();
        let plan = crate::planning::allocate(crate::planning::Strategy::Avalanche, &items, 1000.0);
        assert_eq!(plan.allocations.len(), 1);
        assert_eq!(plan.allocations[0].assign, 50.0);
        assert_eq!(plan.total_assigned, 50.0);
    }

    #[test]
    fn test_update_missing_item() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let result = service.update(ItemId::new(), &ItemPatch::default());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ItemService::new(&storage);

        let keep = service.create("Keep", 10.0, 0.0).unwrap();
        let drop = service.create("Drop", 10.0, 0.0).unwrap();

        let removed = service.remove(drop.id).unwrap();
        assert_eq!(removed.name, "Drop");

        let remaining = service.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, keep.id);

        assert!(service.remove(drop.id).unwrap_err().is_not_found());
    }
}
