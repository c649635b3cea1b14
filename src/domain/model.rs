use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSpec {
    pub name: String,
    pub capacity: f64,
    pub initial_balance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Deposit { store: String, amount: f64 },
    Withdraw { store: String, amount: f64 },
    Describe { store: String },
    Inspect { store: String },
}

impl Step {
    pub fn store(&self) -> &str {
        match self {
            Step::Deposit { store, .. }
            | Step::Withdraw { store, .. }
            | Step::Describe { store }
            | Step::Inspect { store } => store,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Step::Deposit { .. } => "deposit",
            Step::Withdraw { .. } => "withdraw",
            Step::Describe { .. } => "describe",
            Step::Inspect { .. } => "inspect",
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Step::Deposit { amount, .. } | Step::Withdraw { amount, .. } => Some(*amount),
            Step::Describe { .. } | Step::Inspect { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    pub stores: Vec<StoreSpec>,
    pub steps: Vec<Step>,
}

/// 單一步驟執行後的結果，同時作為 CSV 的一列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub index: usize,
    pub store: String,
    pub action: String,
    pub requested: Option<f64>,
    pub returned: Option<f64>,
    pub balance: f64,
    pub capacity: f64,
    pub available: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub name: String,
    pub capacity: f64,
    pub balance: f64,
    pub available: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<StepOutcome>,
    pub final_states: Vec<StoreSnapshot>,
}

impl ScenarioReport {
    pub fn final_state(&self, store: &str) -> Option<&StoreSnapshot> {
        self.final_states.iter().find(|s| s.name == store)
    }
}
