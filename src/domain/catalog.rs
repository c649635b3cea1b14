use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WarehouseId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl fmt::Display for WarehouseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: WarehouseId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub warehouse_id: WarehouseId,
}

/// 倉庫首頁列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseIndex {
    pub warehouses: Vec<Warehouse>,
}

/// 單一倉庫及其物品
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarehouseView {
    pub warehouse: Warehouse,
    pub items: Vec<Item>,
}

impl fmt::Display for WarehouseIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Warehouses")?;
        if self.warehouses.is_empty() {
            return writeln!(f, "No warehouses yet.");
        }
        for warehouse in &self.warehouses {
            writeln!(f, "  [{}] {}", warehouse.id, warehouse.name)?;
        }
        Ok(())
    }
}

impl fmt::Display for WarehouseView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.warehouse.name)?;
        if self.items.is_empty() {
            return writeln!(f, "No items in this warehouse.");
        }
        for item in &self.items {
            writeln!(f, "  [{}] {} (Quantity: {})", item.id, item.name, item.quantity)?;
        }
        Ok(())
    }
}
