use crate::core::{BoundedStore, Narrator, Scenario, ScenarioReport, Step, StepOutcome, StoreSnapshot};
use crate::utils::error::{Result, VarastoError};
use crate::utils::validation::{validate_non_empty_string, validate_unique_names, Validate};
use chrono::Utc;
use std::collections::HashMap;

impl Validate for Scenario {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("scenario.name", &self.name)?;

        for spec in &self.stores {
            validate_non_empty_string("stores.name", &spec.name)?;
        }
        validate_unique_names("stores.name", self.stores.iter().map(|s| s.name.as_str()))?;

        for (i, step) in self.steps.iter().enumerate() {
            if !self.stores.iter().any(|s| s.name == step.store()) {
                return Err(VarastoError::UnknownStoreError {
                    step: i + 1,
                    store: step.store().to_string(),
                });
            }
        }

        Ok(())
    }
}

/// 依序執行情境中的每個步驟
pub struct ScenarioEngine<N: Narrator> {
    narrator: N,
}

impl<N: Narrator> ScenarioEngine<N> {
    pub fn new(narrator: N) -> Self {
        Self { narrator }
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    pub fn into_narrator(self) -> N {
        self.narrator
    }

    pub fn run(&mut self, scenario: &Scenario) -> Result<ScenarioReport> {
        scenario.validate()?;

        tracing::info!(
            "Running scenario '{}' ({} stores, {} steps)",
            scenario.name,
            scenario.stores.len(),
            scenario.steps.len()
        );

        // 保留宣告順序，final_states 依此輸出
        let mut stores: Vec<(String, BoundedStore)> = Vec::with_capacity(scenario.stores.len());
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for spec in &scenario.stores {
            let store = match spec.initial_balance {
                Some(balance) => BoundedStore::with_balance(spec.capacity, balance),
                None => BoundedStore::new(spec.capacity),
            };
            tracing::debug!(
                "Created store '{}' (requested capacity {}, initial balance {:?}) -> {}",
                spec.name,
                spec.capacity,
                spec.initial_balance,
                store
            );
            self.narrator.created(&spec.name, &store)?;
            positions.insert(spec.name.as_str(), stores.len());
            stores.push((spec.name.clone(), store));
        }

        let mut outcomes = Vec::with_capacity(scenario.steps.len());
        for (i, step) in scenario.steps.iter().enumerate() {
            let position = positions.get(step.store()).copied().ok_or_else(|| {
                VarastoError::UnknownStoreError {
                    step: i + 1,
                    store: step.store().to_string(),
                }
            })?;
            let store = &mut stores[position].1;

            let returned = apply_step(store, step);
            let outcome = StepOutcome {
                index: i + 1,
                store: step.store().to_string(),
                action: step.action().to_string(),
                requested: step.amount(),
                returned,
                balance: store.balance(),
                capacity: store.capacity(),
                available: store.available_space(),
                description: store.to_string(),
            };

            tracing::debug!(
                "Step {}: {} {:?} on '{}' -> {}",
                outcome.index,
                outcome.action,
                outcome.requested,
                outcome.store,
                outcome.description
            );
            self.narrator.step(&outcome)?;
            outcomes.push(outcome);
        }

        let final_states: Vec<StoreSnapshot> = stores
            .iter()
            .map(|(name, store)| StoreSnapshot {
                name: name.clone(),
                capacity: store.capacity(),
                balance: store.balance(),
                available: store.available_space(),
            })
            .collect();
        self.narrator.finished(&final_states)?;

        tracing::info!("Scenario '{}' finished after {} steps", scenario.name, outcomes.len());

        Ok(ScenarioReport {
            scenario: scenario.name.clone(),
            generated_at: Utc::now(),
            outcomes,
            final_states,
        })
    }
}

fn apply_step(store: &mut BoundedStore, step: &Step) -> Option<f64> {
    match step {
        Step::Deposit { amount, .. } => {
            store.deposit(*amount);
            None
        }
        Step::Withdraw { amount, .. } => Some(store.withdraw(*amount)),
        Step::Describe { .. } | Step::Inspect { .. } => None,
    }
}
