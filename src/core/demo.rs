use crate::core::{Scenario, Step, StoreSpec};

fn store(name: &str, capacity: f64, initial_balance: Option<f64>) -> StoreSpec {
    StoreSpec {
        name: name.to_string(),
        capacity,
        initial_balance,
    }
}

fn deposit(store: &str, amount: f64) -> Step {
    Step::Deposit {
        store: store.to_string(),
        amount,
    }
}

fn withdraw(store: &str, amount: f64) -> Step {
    Step::Withdraw {
        store: store.to_string(),
        amount,
    }
}

fn describe(store: &str) -> Step {
    Step::Describe {
        store: store.to_string(),
    }
}

/// 內建示範：一個果汁桶、一個啤酒桶，再加上兩個用無效參數建立的容器
pub fn walkthrough() -> Scenario {
    Scenario {
        name: "walkthrough".to_string(),
        description: Some(
            "Fill, drain, overflow and underflow two stores, then show how invalid \
             construction arguments are normalized"
                .to_string(),
        ),
        stores: vec![
            store("juice", 100.0, None),
            store("beer", 100.0, Some(20.2)),
            store("negative capacity", -100.0, None),
            store("negative balance", 100.0, Some(-50.7)),
        ],
        steps: vec![
            Step::Inspect {
                store: "beer".to_string(),
            },
            deposit("juice", 50.7),
            withdraw("juice", 3.14),
            describe("negative capacity"),
            describe("negative balance"),
            // 溢出與負數輸入
            deposit("beer", 1000.0),
            deposit("juice", -666.0),
            withdraw("beer", 1000.0),
            withdraw("juice", -32.9),
        ],
    }
}
