use crate::domain::market::CurrencyPair;
use crate::domain::order::pricing::{discount_price, round_price};

/// Reason an order draft was rejected, in the order checks run.
///
/// Only the first failing check is reported even when several are violated
/// at once; price and amount problems always surface before balance
/// problems.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderRejection {
    InvalidPrice,
    InvalidAmount,
    BelowMinAmount { min: f64 },
    InsufficientBalance,
}

impl std::fmt::Display for OrderRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPrice => write!(f, "有効な価格を入力してください"),
            Self::InvalidAmount => write!(f, "有効な数量を入力してください"),
            Self::BelowMinAmount { min } => write!(f, "最小数量は{min}です"),
            Self::InsufficientBalance => write!(f, "利用可能残高が不足しています"),
        }
    }
}

/// Order-form reducer: price/amount state plus the derived validation
/// facts the order page shows.
///
/// Everything here is local and synchronous. Invalid drafts are never an
/// error; they are represented by `is_valid() == false` and the result of
/// `validate()`. External changes (pair switch, market tick, balance
/// refresh) enter through the `set_*` transitions, which the reactive
/// binding in the application layer wires to its signals.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    pair: CurrencyPair,
    current_price: f64,
    available_balance: f64,
    pub price: f64,
    pub amount: f64,
}

impl OrderForm {
    pub fn new(pair: CurrencyPair, current_price: f64, available_balance: f64) -> Self {
        let mut form =
            Self { pair, current_price, available_balance, price: 0.0, amount: 0.0 };
        form.initialize_defaults();
        form
    }

    /// Rounded market price and the pair minimum
    pub fn initialize_defaults(&mut self) {
        self.price = round_price(self.current_price, self.pair);
        self.amount = self.min_amount();
    }

    pub fn reset(&mut self) {
        self.initialize_defaults();
    }

    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    pub fn available_balance(&self) -> f64 {
        self.available_balance
    }

    pub fn min_amount(&self) -> f64 {
        self.pair.min_amount()
    }

    pub fn step(&self) -> f64 {
        self.pair.amount_step()
    }

    /// price × amount floored to a whole yen
    pub fn estimated_total(&self) -> f64 {
        (self.price * self.amount).floor()
    }

    pub fn is_balance_sufficient(&self) -> bool {
        self.estimated_total() <= self.available_balance
    }

    pub fn is_valid(&self) -> bool {
        self.price > 0.0
            && self.amount > 0.0
            && self.amount >= self.min_amount()
            && self.is_balance_sufficient()
    }

    pub fn increment_amount(&mut self) {
        self.amount = round_3dp(self.amount + self.step());
    }

    /// Decrement by one step, silently clamping at the pair minimum.
    pub fn decrement_amount(&mut self) {
        self.amount = self.min_amount().max(round_3dp(self.amount - self.step()));
    }

    /// Quick-select price at `percentage` percent of the market price
    pub fn set_discount_price(&mut self, percentage: f64) {
        self.price = discount_price(self.current_price, percentage);
    }

    /// Pair switch: amount snaps to the new minimum, and the price is
    /// recomputed when a market price is known.
    pub fn set_pair(&mut self, pair: CurrencyPair) {
        self.pair = pair;
        self.amount = self.min_amount();
        if self.current_price > 0.0 {
            self.price = round_price(self.current_price, self.pair);
        }
    }

    /// Fresh market tick: the limit price follows the rounded market price.
    /// Non-positive ticks (startup, failed fetch) leave the form untouched.
    pub fn set_current_price(&mut self, current_price: f64) {
        self.current_price = current_price;
        if current_price > 0.0 {
            self.price = round_price(current_price, self.pair);
        }
    }

    pub fn set_available_balance(&mut self, available_balance: f64) {
        self.available_balance = available_balance;
    }

    /// Checks run in a fixed order; the first failure wins.
    pub fn validate(&self) -> Result<(), OrderRejection> {
        if self.price <= 0.0 {
            return Err(OrderRejection::InvalidPrice);
        }
        if self.amount <= 0.0 {
            return Err(OrderRejection::InvalidAmount);
        }
        if self.amount < self.min_amount() {
            return Err(OrderRejection::BelowMinAmount { min: self.min_amount() });
        }
        if !self.is_balance_sufficient() {
            return Err(OrderRejection::InsufficientBalance);
        }
        Ok(())
    }
}

/// Keep stepped amounts on three decimal places so repeated ±step does not
/// accumulate binary-float drift.
fn round_3dp(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
