use crate::config::scenario_config::substitute_env_vars;
use crate::core::catalog::Catalog;
use crate::core::{WarehouseId, WarehouseRepository};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub warehouses: Vec<WarehouseSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseSeed {
    pub name: String,
    #[serde(default)]
    pub items: Vec<ItemSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSeed {
    pub name: String,
    pub quantity: QuantityInput,
}

/// 數量可以寫成整數、浮點數或字串，一律照表單輸入的規則解析
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(i64),
    Float(f64),
    Text(String),
}

impl QuantityInput {
    pub fn raw(&self) -> String {
        match self {
            QuantityInput::Number(n) => n.to_string(),
            // Debug 格式保留小數點（3.0 而不是 3），整數解析因此失敗
            QuantityInput::Float(f) => format!("{:?}", f),
            QuantityInput::Text(s) => s.clone(),
        }
    }
}

impl SeedConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 依目錄規則匯入；被拒絕的倉庫或物品會被略過
    pub fn apply<R: WarehouseRepository>(&self, catalog: &mut Catalog<R>) -> Vec<WarehouseId> {
        let mut created = Vec::new();

        for seed in &self.warehouses {
            let Some(id) = catalog.create_warehouse(&seed.name) else {
                tracing::warn!("Skipping warehouse with blank name");
                continue;
            };

            for item in &seed.items {
                let raw = item.quantity.raw();
                if catalog.add_item(id, &item.name, &raw).is_none() {
                    tracing::warn!(
                        "Skipping item '{}' (quantity '{}') in warehouse '{}'",
                        item.name,
                        raw,
                        seed.name
                    );
                }
            }

            created.push(id);
        }

        created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRepository;

    #[test]
    fn test_apply_seed_skips_invalid_entries() {
        let toml_content = r#"
[[warehouses]]
name = "Main"

[[warehouses.items]]
name = "Bolts"
quantity = 12

[[warehouses.items]]
name = "Nuts"
quantity = "7"

[[warehouses.items]]
name = "Broken"
quantity = "abc"

[[warehouses]]
name = "   "

[[warehouses]]
name = "Empty"
"#;

        let seed = SeedConfig::from_toml_str(toml_content).unwrap();
        let mut catalog = Catalog::new(InMemoryRepository::new());
        let created = seed.apply(&mut catalog);

        assert_eq!(created.len(), 2);
        let main = catalog.view_warehouse(created[0]).unwrap();
        assert_eq!(main.items.len(), 2);
        assert_eq!(main.items[1].quantity, 7);
        assert!(catalog.view_warehouse(created[1]).unwrap().items.is_empty());
    }

    #[test]
    fn test_float_quantity_skips_item_not_file() {
        let toml_content = r#"
[[warehouses]]
name = "Main"

[[warehouses.items]]
name = "Half pallet"
quantity = 2.5

[[warehouses.items]]
name = "Whole pallet"
quantity = 3.0

[[warehouses.items]]
name = "Crates"
quantity = 4
"#;

        let seed = SeedConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(seed.warehouses[0].items[0].quantity.raw(), "2.5");
        assert_eq!(seed.warehouses[0].items[1].quantity.raw(), "3.0");

        let mut catalog = Catalog::new(InMemoryRepository::new());
        let created = seed.apply(&mut catalog);

        let main = catalog.view_warehouse(created[0]).unwrap();
        assert_eq!(main.items.len(), 1);
        assert_eq!(main.items[0].name, "Crates");
        assert_eq!(main.items[0].quantity, 4);
    }
}
