use crate::domain::errors::AppError;
use crate::domain::history::{AssetFilter, HistoryRange, TransactionLog};
use crate::domain::market::{Balance, ChartPeriod, CryptoSnapshot, CurrencyPair, OrderConfirmation, OrderRequest};

/// Port for the trading backend.
///
/// All calls are plain request/response with no cancellation token; a call
/// started while a previous one is in flight is neither coalesced nor
/// aborted, so whichever resolves last wins on the shared state.
#[allow(async_fn_in_trait)]
pub trait TradingGateway {
    /// Current price, 24h change and chart series for one pair
    async fn fetch_crypto(
        &self,
        pair: CurrencyPair,
        period: ChartPeriod,
    ) -> Result<CryptoSnapshot, AppError>;

    /// Available account balance in JPY
    async fn fetch_balance(&self) -> Result<Balance, AppError>;

    /// Place a limit order
    async fn submit_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, AppError>;

    /// Page of settled trades
    async fn fetch_transactions(
        &self,
        asset: AssetFilter,
        range: HistoryRange,
        page: u32,
        limit: u32,
    ) -> Result<TransactionLog, AppError>;
}
