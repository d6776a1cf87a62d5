use std::rc::Rc;

use leptos::{
    Memo, RwSignal, SignalGet, SignalSet, SignalUpdate, SignalWith, create_memo, create_rw_signal,
};

use crate::domain::errors::AppError;
use crate::domain::history::{
    AssetFilter, HistoryRange, TradeStatistics, Transaction, calculate_statistics,
    filter_transactions,
};
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::domain::market::TradingGateway;
use crate::log_error;

/// Transactions shown per page before "load more"
pub const HISTORY_PAGE_SIZE: usize = 10;

/// How many settled trades one refresh pulls from the gateway; filtering
/// and paging happen client-side over this window.
const FETCH_LIMIT: u32 = 100;

/// Trade-history state: the fetched transaction log plus asset/time filters,
/// client-side pagination and the derived statistics cards.
#[derive(Clone)]
pub struct TradeHistoryState<G: TradingGateway> {
    gateway: Rc<G>,
    transactions: RwSignal<Vec<Transaction>>,
    pub asset_filter: RwSignal<AssetFilter>,
    pub time_range: RwSignal<HistoryRange>,
    page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<AppError>>,
    filtered: Memo<Vec<Transaction>>,
    displayed: Memo<Vec<Transaction>>,
    statistics: Memo<TradeStatistics>,
}

impl<G: TradingGateway> TradeHistoryState<G> {
    pub fn new(gateway: Rc<G>) -> Self {
        let transactions = create_rw_signal(Vec::<Transaction>::new());
        let asset_filter = create_rw_signal(AssetFilter::All);
        let time_range = create_rw_signal(HistoryRange::All);
        let page = create_rw_signal(1usize);

        let filtered = create_memo(move |_| {
            let now_ms = get_time_provider().now_ms();
            transactions
                .with(|log| filter_transactions(log, asset_filter.get(), time_range.get(), now_ms))
        });

        let displayed = create_memo(move |_| {
            filtered.with(|log| {
                let visible = (page.get() * HISTORY_PAGE_SIZE).min(log.len());
                log[..visible].to_vec()
            })
        });

        let statistics = create_memo(move |_| {
            filtered.with(|log| calculate_statistics(log, time_range.get()))
        });

        Self {
            gateway,
            transactions,
            asset_filter,
            time_range,
            page,
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            filtered,
            displayed,
            statistics,
        }
    }

    pub fn displayed_transactions(&self) -> Memo<Vec<Transaction>> {
        self.displayed
    }

    pub fn statistics(&self) -> Memo<TradeStatistics> {
        self.statistics
    }

    pub fn can_load_more(&self) -> bool {
        self.displayed.with(|shown| self.filtered.with(|all| shown.len() < all.len()))
    }

    /// Filter changes restart pagination at the first page
    pub fn set_asset_filter(&self, filter: AssetFilter) {
        self.asset_filter.set(filter);
        self.page.set(1);
    }

    pub fn set_time_range(&self, range: HistoryRange) {
        self.time_range.set(range);
        self.page.set(1);
    }

    pub fn load_more(&self) {
        if self.can_load_more() {
            self.page.update(|page| *page += 1);
        }
    }

    /// Re-pull the transaction window from the gateway
    pub async fn refresh(&self) {
        self.loading.set(true);
        self.error.set(None);

        match self
            .gateway
            .fetch_transactions(AssetFilter::All, HistoryRange::All, 1, FETCH_LIMIT)
            .await
        {
            Ok(log) => {
                self.transactions.set(log.transactions);
                self.page.set(1);
            }
            Err(error) => {
                log_error!(
                    LogComponent::Application("TradeHistory"),
                    "Failed to fetch transaction log: {error}"
                );
                self.error.set(Some(error));
            }
        }

        self.loading.set(false);
    }
}
