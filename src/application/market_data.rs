use std::rc::Rc;

use leptos::{RwSignal, SignalGetUntracked, SignalSet, create_rw_signal};

use crate::domain::errors::AppError;
use crate::domain::logging::LogComponent;
use crate::domain::market::{
    ChartPoint, CurrencyPair, OrderConfirmation, OrderRequest, TimeFilter, TradingGateway,
};
use crate::{log_error, log_info};

/// Market-data state for the order page: current price, 24h change, chart
/// series and available balance, refreshed from the gateway.
///
/// Each fetch records its own failure in `error` and never unwinds into the
/// caller. There is no timeout or cancellation: a hung request keeps
/// `loading` set until it resolves, and overlapping fetches settle
/// last-writer-wins on the shared signals.
#[derive(Clone)]
pub struct MarketDataService<G: TradingGateway> {
    gateway: Rc<G>,
    pair: RwSignal<CurrencyPair>,
    pub current_price: RwSignal<f64>,
    pub price_change: RwSignal<f64>,
    pub chart_data: RwSignal<Vec<ChartPoint>>,
    pub available_balance: RwSignal<f64>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<AppError>>,
}

impl<G: TradingGateway> MarketDataService<G> {
    pub fn new(gateway: Rc<G>, pair: RwSignal<CurrencyPair>) -> Self {
        Self {
            gateway,
            pair,
            current_price: create_rw_signal(0.0),
            price_change: create_rw_signal(0.0),
            chart_data: create_rw_signal(Vec::new()),
            available_balance: create_rw_signal(0.0),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
        }
    }

    pub fn pair(&self) -> RwSignal<CurrencyPair> {
        self.pair
    }

    /// Price, change and chart series for the selected pair in one call
    pub async fn fetch_crypto_data(&self, filter: TimeFilter) {
        self.loading.set(true);
        self.error.set(None);

        let pair = self.pair.get_untracked();
        match self.gateway.fetch_crypto(pair, filter.chart_period()).await {
            Ok(snapshot) => {
                self.current_price.set(snapshot.current_price);
                self.price_change.set(snapshot.change_percent);
                self.chart_data.set(snapshot.chart_data);
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("MarketData"),
                    "Failed to fetch crypto data for {pair}: {error}"
                );
                self.error.set(Some(error));
            }
        }

        self.loading.set(false);
    }

    pub async fn fetch_balance(&self) {
        self.loading.set(true);
        self.error.set(None);

        match self.gateway.fetch_balance().await {
            Ok(balance) => self.available_balance.set(balance.available_balance),
            Err(error) => {
                log_error!(
                    LogComponent::Application("MarketData"),
                    "Failed to fetch balance: {error}"
                );
                self.error.set(Some(error));
            }
        }

        self.loading.set(false);
    }

    /// Crypto data and balance concurrently; both settle before returning,
    /// each recording its own error.
    pub async fn fetch_all_data(&self, filter: TimeFilter) {
        futures::join!(self.fetch_crypto_data(filter), self.fetch_balance());
    }

    /// Place a limit order for the selected pair. The failure is recorded
    /// in `error` and also handed back so the form can react to it.
    pub async fn submit_order(
        &self,
        price: f64,
        amount: f64,
    ) -> Result<OrderConfirmation, AppError> {
        self.loading.set(true);
        self.error.set(None);

        let request = OrderRequest::limit(self.pair.get_untracked(), price, amount);
        let result = self.gateway.submit_order(&request).await;

        match &result {
            Ok(confirmation) => {
                log_info!(
                    LogComponent::Application("MarketData"),
                    "Order accepted: {} ({} {} @ {})",
                    confirmation.order_id,
                    request.amount,
                    request.pair,
                    request.price
                );
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("MarketData"),
                    "Order submission failed: {error}"
                );
                self.error.set(Some(error.clone()));
            }
        }

        self.loading.set(false);
        result
    }
}
