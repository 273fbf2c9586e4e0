//! In-memory item storage

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::types::{default_items, Item};

/// Ordered, in-memory sequence of shopping list items.
///
/// Cloning is cheap and every clone shares the same sequence, so one store can
/// be handed to the router state and kept by the caller for inspection.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the default Apple/Banana/Orange items
    pub fn seeded() -> Self {
        Self::with_items(default_items())
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
        }
    }

    /// Get all items in insertion order
    pub async fn list(&self) -> Vec<Item> {
        let items = self.items.read().await;
        items.clone()
    }

    /// Get every item whose id matches. Ids are not unique, so this may
    /// return more than one.
    pub async fn find_by_id(&self, id: i64) -> Vec<Item> {
        let items = self.items.read().await;
        items.iter().filter(|item| item.id == id).cloned().collect()
    }

    /// Append a new item, rejecting it if another item already has its name
    pub async fn create(&self, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;

        if let Some(existing) = items.iter().find(|i| i.name == item.name) {
            return Err(Error::ItemAlreadyExists(existing.name.clone()));
        }

        items.push(item.clone());
        Ok(item)
    }

    /// Overwrite the first item with a matching id
    pub async fn update(&self, id: i64, item: Item) -> Result<Item> {
        let mut items = self.items.write().await;

        let existing = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(Error::ItemNotFound(id))?;

        existing.merge(item);
        Ok(existing.clone())
    }

    /// Remove every item
    pub async fn clear(&self) {
        let mut items = self.items.write().await;
        items.clear();
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_seeded_order() {
        let store = ItemStore::seeded();
        let names: Vec<String> = block_on(store.list()).into_iter().map(|i| i.name).collect();

        assert_eq!(names, vec!["Apple", "Banana", "Orange"]);
    }

    #[test]
    fn test_new_is_empty() {
        let store = ItemStore::new();
        assert!(block_on(store.is_empty()));
        assert_eq!(block_on(store.len()), 0);
    }

    #[test]
    fn test_find_by_id_returns_all_matches() {
        let store = ItemStore::with_items(vec![
            Item::new(7, "Milk", 1),
            Item::new(8, "Eggs", 12),
            Item::new(7, "Bread", 2),
        ]);

        let found = block_on(store.find_by_id(7));
        assert_eq!(found, vec![Item::new(7, "Milk", 1), Item::new(7, "Bread", 2)]);
        assert!(block_on(store.find_by_id(9)).is_empty());
    }

    #[test]
    fn test_create_appends() {
        let store = ItemStore::seeded();
        let created = block_on(store.create(Item::new(4, "Pear", 2))).unwrap();

        assert_eq!(created, Item::new(4, "Pear", 2));
        let items = block_on(store.list());
        assert_eq!(items.len(), 4);
        assert_eq!(items.last(), Some(&Item::new(4, "Pear", 2)));
    }

    #[test]
    fn test_create_duplicate_name() {
        let store = ItemStore::seeded();
        let err = block_on(store.create(Item::new(42, "Apple", 1))).unwrap_err();

        assert!(matches!(err, Error::ItemAlreadyExists(ref name) if name == "Apple"));
        assert_eq!(err.to_string(), "Item Apple already exists");
        assert_eq!(block_on(store.len()), 3);
    }

    #[test]
    fn test_create_name_match_is_case_sensitive() {
        let store = ItemStore::seeded();
        assert!(block_on(store.create(Item::new(4, "apple", 1))).is_ok());
    }

    #[test]
    fn test_create_allows_duplicate_id() {
        let store = ItemStore::seeded();
        block_on(store.create(Item::new(1, "Grape", 3))).unwrap();

        assert_eq!(block_on(store.find_by_id(1)).len(), 2);
    }

    #[test]
    fn test_update_first_match_only() {
        let store = ItemStore::with_items(vec![Item::new(5, "Tea", 1), Item::new(5, "Coffee", 1)]);
        let updated = block_on(store.update(5, Item::new(5, "Green Tea", 3))).unwrap();

        assert_eq!(updated, Item::new(5, "Green Tea", 3));
        assert_eq!(
            block_on(store.list()),
            vec![Item::new(5, "Green Tea", 3), Item::new(5, "Coffee", 1)]
        );
    }

    #[test]
    fn test_update_can_change_id() {
        let store = ItemStore::seeded();
        block_on(store.update(2, Item::new(20, "Banana", 10))).unwrap();

        assert!(block_on(store.find_by_id(2)).is_empty());
        assert_eq!(block_on(store.find_by_id(20)), vec![Item::new(20, "Banana", 10)]);
    }

    #[test]
    fn test_update_missing() {
        let store = ItemStore::seeded();
        let err = block_on(store.update(999, Item::new(999, "Kiwi", 1))).unwrap_err();

        assert!(matches!(err, Error::ItemNotFound(999)));
        assert_eq!(err.to_string(), "Item with id 999 not found");
    }

    #[test]
    fn test_clones_share_items() {
        let store = ItemStore::seeded();
        let other = store.clone();

        block_on(other.clear());
        assert!(block_on(store.is_empty()));
    }
}
