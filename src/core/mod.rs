pub mod catalog;
pub mod demo;
pub mod scenario;

pub use crate::domain::catalog::{Item, ItemId, Warehouse, WarehouseId, WarehouseIndex, WarehouseView};
pub use crate::domain::model::{Scenario, ScenarioReport, Step, StepOutcome, StoreSnapshot, StoreSpec};
pub use crate::domain::ports::{Narrator, Storage, WarehouseRepository};
pub use crate::domain::store::BoundedStore;
pub use crate::utils::error::Result;
