use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::domain::errors::AppError;
use crate::domain::history::{AssetFilter, HistoryRange, Transaction, TransactionLog};
use crate::domain::logging::LogComponent;
use crate::domain::market::{
    Balance, ChartPeriod, CryptoSnapshot, CurrencyPair, OrderConfirmation, OrderRequest,
    TradingGateway,
};
use crate::{log_debug, log_error};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// REST client for the trading backend.
///
/// Owns nothing but the base URL; every endpoint lives under the `/api/v1`
/// prefix. Transport failures and structured error bodies are both folded
/// into [`AppError`] before they leave this layer.
#[derive(Debug, Clone)]
pub struct RestTradingGateway {
    base_url: String,
}

impl RestTradingGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn api_url(&self, endpoint: &str) -> String {
        let normalized =
            if endpoint.starts_with('/') { endpoint.to_string() } else { format!("/{endpoint}") };
        format!("{}/api/v1{}", self.base_url, normalized)
    }

    pub fn crypto_url(&self, pair: CurrencyPair, period: ChartPeriod) -> String {
        format!("{}?period={}", self.api_url(&format!("/crypto/{}", pair.asset_id())), period)
    }

    pub fn balance_url(&self) -> String {
        self.api_url("/balance")
    }

    pub fn orders_url(&self) -> String {
        self.api_url("/orders")
    }

    pub fn transactions_url(
        &self,
        asset: AssetFilter,
        range: HistoryRange,
        page: u32,
        limit: u32,
    ) -> String {
        format!(
            "{}?asset_filter={asset}&time_filter={range}&page={page}&limit={limit}",
            self.api_url("/trade-history/transactions")
        )
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, AppError> {
        log_debug!(LogComponent::Infrastructure("RestAPI"), "GET {url}");

        let response = Request::get(&url).send().await.map_err(transport_error)?;
        Self::parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, AppError> {
        if !response.ok() {
            return Err(decode_error_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Other(format!("Failed to parse response: {e}")))
    }
}

impl Default for RestTradingGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl TradingGateway for RestTradingGateway {
    async fn fetch_crypto(
        &self,
        pair: CurrencyPair,
        period: ChartPeriod,
    ) -> Result<CryptoSnapshot, AppError> {
        self.get_json(self.crypto_url(pair, period)).await
    }

    async fn fetch_balance(&self) -> Result<Balance, AppError> {
        self.get_json(self.balance_url()).await
    }

    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, AppError> {
        let url = self.orders_url();
        log_debug!(LogComponent::Infrastructure("RestAPI"), "POST {url}");

        let response = Request::post(&url)
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;
        Self::parse(response).await
    }

    async fn fetch_transactions(
        &self,
        asset: AssetFilter,
        range: HistoryRange,
        page: u32,
        limit: u32,
    ) -> Result<TransactionLog, AppError> {
        let dto: TransactionLogDto =
            self.get_json(self.transactions_url(asset, range, page, limit)).await?;
        Ok(dto.into())
    }
}

/// Map a transport-level failure onto the error taxonomy
fn transport_error(error: gloo_net::Error) -> AppError {
    let message = error.to_string();
    if message.contains("timeout") {
        return AppError::Timeout;
    }
    match error {
        gloo_net::Error::JsError(_) => AppError::Connection,
        _ => AppError::Other(message),
    }
}

/// Decode a non-2xx response body (`{error, message}`), falling back to the
/// bare status line when the body is not structured.
async fn decode_error_response(response: Response) -> AppError {
    let status = response.status();
    let status_text = response.status_text();

    match response.json::<ApiErrorBody>().await {
        Ok(body) => {
            log_error!(
                LogComponent::Infrastructure("RestAPI"),
                "API error {status}: {} ({})",
                body.error,
                body.message.as_deref().unwrap_or("-")
            );
            AppError::from_api_body(&body.error, body.message)
        }
        Err(_) => AppError::Other(format!("HTTP {status}: {status_text}")),
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

/// Wire shape of the transaction log (snake_case, RFC3339 timestamps)
#[derive(Debug, Deserialize)]
struct TransactionLogDto {
    #[serde(default)]
    transactions: Option<Vec<TransactionDto>>,
    #[serde(default)]
    pagination: Option<PaginationDto>,
}

#[derive(Debug, Deserialize)]
struct TransactionDto {
    id: String,
    cryptocurrency: String,
    timestamp: String,
    profit: f64,
    order_type: String,
    order_id: String,
    buy_price: f64,
    sell_price: f64,
    amount: f64,
    buy_order_id: String,
}

#[derive(Debug, Deserialize)]
struct PaginationDto {
    #[serde(default)]
    has_next: bool,
    #[serde(default)]
    total_count: usize,
}

impl From<TransactionLogDto> for TransactionLog {
    fn from(dto: TransactionLogDto) -> Self {
        let pagination = dto.pagination.unwrap_or(PaginationDto { has_next: false, total_count: 0 });
        Self {
            transactions: dto
                .transactions
                .unwrap_or_default()
                .into_iter()
                .map(Transaction::from)
                .collect(),
            has_more: pagination.has_next,
            total: pagination.total_count,
        }
    }
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Self {
            id: dto.id,
            cryptocurrency: dto.cryptocurrency,
            timestamp_ms: js_sys::Date::parse(&dto.timestamp),
            profit: dto.profit,
            order_type: dto.order_type,
            order_id: dto.order_id,
            buy_price: dto.buy_price,
            sell_price: dto.sell_price,
            amount: dto.amount,
            buy_order_id: dto.buy_order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_url_uses_asset_id_and_period() {
        let gateway = RestTradingGateway::default();
        assert_eq!(
            gateway.crypto_url(CurrencyPair::BtcJpy, ChartPeriod::Week),
            "http://localhost:8080/api/v1/crypto/bitcoin?period=7d"
        );
        assert_eq!(
            gateway.crypto_url(CurrencyPair::EthJpy, ChartPeriod::Day),
            "http://localhost:8080/api/v1/crypto/ethereum?period=24h"
        );
    }

    #[test]
    fn endpoints_share_the_api_prefix() {
        let gateway = RestTradingGateway::new("https://api.example.test");
        assert_eq!(gateway.balance_url(), "https://api.example.test/api/v1/balance");
        assert_eq!(gateway.orders_url(), "https://api.example.test/api/v1/orders");
    }

    #[test]
    fn transactions_url_carries_filters_and_paging() {
        let gateway = RestTradingGateway::default();
        assert_eq!(
            gateway.transactions_url(AssetFilter::Btc, HistoryRange::SevenDays, 2, 10),
            "http://localhost:8080/api/v1/trade-history/transactions?asset_filter=BTC&time_filter=7days&page=2&limit=10"
        );
    }

    #[test]
    fn transaction_log_tolerates_null_fields() {
        let dto: TransactionLogDto =
            serde_json::from_str(r#"{"transactions": null, "pagination": null}"#).unwrap();
        let log: TransactionLog = dto.into();
        assert!(log.transactions.is_empty());
        assert!(!log.has_more);
        assert_eq!(log.total, 0);
    }
}
