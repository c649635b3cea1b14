use crate::domain::catalog::{Item, ItemId, Warehouse, WarehouseId};
use crate::domain::model::{StepOutcome, StoreSnapshot};
use crate::domain::store::BoundedStore;
use crate::utils::error::Result;

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

/// 情境執行過程的敘述輸出
pub trait Narrator {
    fn created(&mut self, name: &str, store: &BoundedStore) -> Result<()>;
    fn step(&mut self, outcome: &StepOutcome) -> Result<()>;
    fn finished(&mut self, final_states: &[StoreSnapshot]) -> Result<()>;
}

pub trait WarehouseRepository {
    fn insert_warehouse(&mut self, name: String) -> WarehouseId;
    fn find_warehouse(&self, id: WarehouseId) -> Option<Warehouse>;
    fn warehouses(&self) -> Vec<Warehouse>;
    /// 刪除倉庫並連帶刪除其所有物品
    fn remove_warehouse(&mut self, id: WarehouseId) -> Option<Warehouse>;

    fn insert_item(&mut self, warehouse_id: WarehouseId, name: String, quantity: i64) -> ItemId;
    fn find_item(&self, id: ItemId) -> Option<Item>;
    fn items_in(&self, warehouse_id: WarehouseId) -> Vec<Item>;
    fn remove_item(&mut self, id: ItemId) -> Option<Item>;
    fn item_count(&self) -> usize;
}
