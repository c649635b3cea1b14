use crate::core::{Item, ItemId, Warehouse, WarehouseId, WarehouseRepository};
use std::collections::BTreeMap;

/// 記憶體內的倉庫資料，ID 從 1 開始遞增且不重複使用
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    warehouses: BTreeMap<WarehouseId, Warehouse>,
    items: BTreeMap<ItemId, Item>,
    next_warehouse_id: u64,
    next_item_id: u64,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WarehouseRepository for InMemoryRepository {
    fn insert_warehouse(&mut self, name: String) -> WarehouseId {
        self.next_warehouse_id += 1;
        let id = WarehouseId(self.next_warehouse_id);
        self.warehouses.insert(id, Warehouse { id, name });
        id
    }

    fn find_warehouse(&self, id: WarehouseId) -> Option<Warehouse> {
        self.warehouses.get(&id).cloned()
    }

    fn warehouses(&self) -> Vec<Warehouse> {
        self.warehouses.values().cloned().collect()
    }

    fn remove_warehouse(&mut self, id: WarehouseId) -> Option<Warehouse> {
        let warehouse = self.warehouses.remove(&id)?;
        self.items.retain(|_, item| item.warehouse_id != id);
        Some(warehouse)
    }

    fn insert_item(&mut self, warehouse_id: WarehouseId, name: String, quantity: i64) -> ItemId {
        self.next_item_id += 1;
        let id = ItemId(self.next_item_id);
        self.items.insert(
            id,
            Item {
                id,
                name,
                quantity,
                warehouse_id,
            },
        );
        id
    }

    fn find_item(&self, id: ItemId) -> Option<Item> {
        self.items.get(&id).cloned()
    }

    fn items_in(&self, warehouse_id: WarehouseId) -> Vec<Item> {
        self.items
            .values()
            .filter(|item| item.warehouse_id == warehouse_id)
            .cloned()
            .collect()
    }

    fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        self.items.remove(&id)
    }

    fn item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_and_not_reused() {
        let mut repo = InMemoryRepository::new();
        let first = repo.insert_warehouse("A".to_string());
        let second = repo.insert_warehouse("B".to_string());
        assert_eq!(first, WarehouseId(1));
        assert_eq!(second, WarehouseId(2));

        repo.remove_warehouse(second);
        assert_eq!(repo.insert_warehouse("C".to_string()), WarehouseId(3));
    }

    #[test]
    fn test_remove_warehouse_cascades_to_items() {
        let mut repo = InMemoryRepository::new();
        let keep = repo.insert_warehouse("Keep".to_string());
        let drop = repo.insert_warehouse("Drop".to_string());
        repo.insert_item(drop, "Item 1".to_string(), 1);
        repo.insert_item(drop, "Item 2".to_string(), 2);
        let kept = repo.insert_item(keep, "Item 3".to_string(), 3);

        assert!(repo.remove_warehouse(drop).is_some());
        assert_eq!(repo.item_count(), 1);
        assert!(repo.find_item(kept).is_some());
        assert!(repo.remove_warehouse(drop).is_none());
    }
}
