pub use super::value_objects::CurrencyPair;
use serde::{Deserialize, Serialize};

/// Single point of a price chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub day: String,
    pub price: f64,
}

/// Market snapshot for one asset as served by `/crypto/{id}`.
///
/// The endpoint returns price and chart series together, so one fetch covers
/// both concerns. Fields the UI does not consume are not modeled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoSnapshot {
    pub current_price: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
}

/// Account balance as served by `/balance`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub available_balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderType {
    #[serde(rename = "limit")]
    Limit,
}

/// Order submission payload for `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub pair: CurrencyPair,
    pub order_type: OrderType,
    pub price: f64,
    pub amount: f64,
}

impl OrderRequest {
    pub fn limit(pair: CurrencyPair, price: f64, amount: f64) -> Self {
        Self { pair, order_type: OrderType::Limit, price, amount }
    }
}

/// Accepted order as returned by the order endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub estimated_total: f64,
}
