use serde::Serialize;
use std::fmt;

/// 有容量上限的數量容器。
///
/// 所有操作都是全函數：無效的輸入會被夾到最接近的合法值，而不是回傳錯誤。
/// 每次操作後都保證 `0 <= balance <= capacity`。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundedStore {
    capacity: f64,
    balance: f64,
}

impl BoundedStore {
    /// 建立空的容器
    pub fn new(capacity: f64) -> Self {
        Self::with_balance(capacity, 0.0)
    }

    /// 建立帶初始餘額的容器，容量與餘額都會被正規化
    pub fn with_balance(capacity: f64, initial_balance: f64) -> Self {
        let capacity = Self::normalize_capacity(capacity);
        let balance = Self::normalize_balance(initial_balance, capacity);
        Self { capacity, balance }
    }

    fn normalize_capacity(requested: f64) -> f64 {
        // NaN > 0.0 為 false，所以 NaN 也會變成 0
        if requested > 0.0 {
            requested
        } else {
            0.0
        }
    }

    fn normalize_balance(requested: f64, capacity: f64) -> f64 {
        // NaN 不小於 0 也不小於等於容量，會落到最後的裝滿分支
        if requested < 0.0 {
            0.0
        } else if requested <= capacity {
            requested
        } else {
            capacity
        }
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// 還能放入多少
    pub fn available_space(&self) -> f64 {
        // 無限容量裝滿時 inf - inf 會得到 NaN，max 會把它收斂成 0
        (self.capacity - self.balance).max(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.balance == 0.0
    }

    pub fn is_full(&self) -> bool {
        self.balance == self.capacity
    }

    /// 放入數量。負數被忽略，超出容量的部分直接丟棄。
    pub fn deposit(&mut self, amount: f64) {
        if amount < 0.0 {
            return;
        }

        if amount <= self.available_space() {
            // 浮點誤差可能讓總和超出容量一個 ulp
            self.balance = (self.balance + amount).min(self.capacity);
        } else {
            self.balance = self.capacity;
        }
    }

    /// 取出數量，回傳實際取出的量。
    ///
    /// 負數回傳 0；要求超過餘額時清空容器並回傳原本的餘額。
    pub fn withdraw(&mut self, amount: f64) -> f64 {
        if amount.is_nan() || amount < 0.0 {
            return 0.0;
        }

        if amount > self.balance {
            let everything = self.balance;
            self.balance = 0.0;
            return everything;
        }

        // 無限餘額減去無限會得到 NaN
        self.balance = (self.balance - amount).max(0.0);
        amount
    }
}

impl fmt::Display for BoundedStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "balance = {}, space remaining {}",
            self.balance,
            self.available_space()
        )
    }
}
