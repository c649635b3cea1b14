use crate::core::{ItemId, WarehouseId, WarehouseIndex, WarehouseRepository, WarehouseView};
use crate::utils::validation::parse_quantity;

/// 倉庫與物品的管理規則。
///
/// 無效的輸入（空白名稱、非正數數量、不存在的倉庫）一律默默忽略，
/// 呼叫端只會從回傳值得知是否有變更。
pub struct Catalog<R: WarehouseRepository> {
    repository: R,
}

impl<R: WarehouseRepository> Catalog<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn index(&self) -> WarehouseIndex {
        WarehouseIndex {
            warehouses: self.repository.warehouses(),
        }
    }

    pub fn create_warehouse(&mut self, name: &str) -> Option<WarehouseId> {
        let name = name.trim();
        if name.is_empty() {
            tracing::debug!("Ignoring warehouse with empty name");
            return None;
        }

        let id = self.repository.insert_warehouse(name.to_string());
        tracing::info!("Created warehouse {} '{}'", id, name);
        Some(id)
    }

    /// 刪除倉庫，其物品一併刪除
    pub fn delete_warehouse(&mut self, id: WarehouseId) -> bool {
        match self.repository.remove_warehouse(id) {
            Some(warehouse) => {
                tracing::info!("Deleted warehouse {} '{}'", id, warehouse.name);
                true
            }
            None => {
                tracing::debug!("Warehouse {} does not exist, nothing to delete", id);
                false
            }
        }
    }

    pub fn view_warehouse(&self, id: WarehouseId) -> Option<WarehouseView> {
        let warehouse = self.repository.find_warehouse(id)?;
        let items = self.repository.items_in(id);
        Some(WarehouseView { warehouse, items })
    }

    pub fn add_item(
        &mut self,
        warehouse_id: WarehouseId,
        name: &str,
        raw_quantity: &str,
    ) -> Option<ItemId> {
        self.repository.find_warehouse(warehouse_id)?;

        let name = name.trim();
        let quantity = parse_quantity(raw_quantity);
        if name.is_empty() || quantity <= 0 {
            tracing::debug!(
                "Ignoring item '{}' with quantity '{}' for warehouse {}",
                name,
                raw_quantity,
                warehouse_id
            );
            return None;
        }

        let id = self
            .repository
            .insert_item(warehouse_id, name.to_string(), quantity);
        tracing::info!(
            "Added item {} '{}' x{} to warehouse {}",
            id,
            name,
            quantity,
            warehouse_id
        );
        Some(id)
    }

    /// 只有物品屬於指定倉庫時才會刪除
    pub fn delete_item(&mut self, warehouse_id: WarehouseId, item_id: ItemId) -> bool {
        match self.repository.find_item(item_id) {
            Some(item) if item.warehouse_id == warehouse_id => {
                self.repository.remove_item(item_id);
                tracing::info!("Removed item {} from warehouse {}", item_id, warehouse_id);
                true
            }
            _ => false,
        }
    }
}
