//! Trade history aggregate: executed-trade records, filters and statistics.

use serde::Deserialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

const DAY_MS: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Reference capital the profit percentage is expressed against
const BASELINE_CAPITAL_JPY: f64 = 10_000_000.0;

/// One settled sell matched against its buy order
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub cryptocurrency: String,
    /// Execution time, milliseconds since the Unix epoch
    pub timestamp_ms: f64,
    pub profit: f64,
    pub order_type: String,
    pub order_id: String,
    pub buy_price: f64,
    pub sell_price: f64,
    pub amount: f64,
    pub buy_order_id: String,
}

/// Aggregated statistics over a set of transactions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeStatistics {
    pub total_profit: f64,
    pub profit_percentage: f64,
    pub execution_count: usize,
    pub period: String,
}

impl TradeStatistics {
    pub fn empty() -> Self {
        Self {
            total_profit: 0.0,
            profit_percentage: 0.0,
            execution_count: 0,
            period: HistoryRange::All.to_string(),
        }
    }
}

/// Page of transactions returned by the gateway
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionLog {
    pub transactions: Vec<Transaction>,
    pub has_more: bool,
    pub total: usize,
}

/// Asset restriction for the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum AssetFilter {
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "BTC")]
    Btc,
    #[strum(serialize = "ETH")]
    Eth,
}

impl AssetFilter {
    fn matches(&self, transaction: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Btc => transaction.cryptocurrency == "Bitcoin",
            Self::Eth => transaction.cryptocurrency == "Ethereum",
        }
    }
}

/// Time restriction for the history view
#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum HistoryRange {
    #[strum(serialize = "all")]
    All,
    #[strum(serialize = "7days")]
    SevenDays,
}

impl HistoryRange {
    fn matches(&self, transaction: &Transaction, now_ms: f64) -> bool {
        match self {
            Self::All => true,
            Self::SevenDays => transaction.timestamp_ms >= now_ms - 7.0 * DAY_MS,
        }
    }
}

/// Apply asset and time filters, preserving order
pub fn filter_transactions(
    transactions: &[Transaction],
    asset: AssetFilter,
    range: HistoryRange,
    now_ms: f64,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| asset.matches(t) && range.matches(t, now_ms))
        .cloned()
        .collect()
}

/// Statistics over an already-filtered transaction set.
///
/// Profit figures are rounded to one decimal place; the percentage is the
/// total profit relative to the baseline capital, zero when nothing was
/// earned.
pub fn calculate_statistics(transactions: &[Transaction], range: HistoryRange) -> TradeStatistics {
    let total_profit: f64 = transactions.iter().map(|t| t.profit).sum();
    let profit_percentage = if total_profit > 0.0 {
        total_profit / BASELINE_CAPITAL_JPY * 100.0
    } else {
        0.0
    };

    TradeStatistics {
        total_profit: round_1dp(total_profit),
        profit_percentage: round_1dp(profit_percentage),
        execution_count: transactions.len(),
        period: range.to_string(),
    }
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sell(id: &str, asset: &str, days_ago: f64, profit: f64, now_ms: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            cryptocurrency: asset.to_string(),
            timestamp_ms: now_ms - days_ago * DAY_MS,
            profit,
            order_type: "sell".to_string(),
            order_id: format!("#BF-{id}"),
            buy_price: 5_800_000.0,
            sell_price: 6_100_000.0,
            amount: 0.15,
            buy_order_id: format!("#BF-{id}b"),
        }
    }

    #[test]
    fn asset_filter_matches_full_names() {
        let now = 1_700_000_000_000.0;
        let log = vec![
            sell("1", "Bitcoin", 1.0, 45_000.0, now),
            sell("2", "Ethereum", 2.0, 2_400.0, now),
        ];

        let btc = filter_transactions(&log, AssetFilter::Btc, HistoryRange::All, now);
        assert_eq!(btc.len(), 1);
        assert_eq!(btc[0].id, "1");

        let eth = filter_transactions(&log, AssetFilter::Eth, HistoryRange::All, now);
        assert_eq!(eth.len(), 1);
        assert_eq!(eth[0].id, "2");
    }

    #[test]
    fn seven_day_range_is_inclusive_at_the_boundary() {
        let now = 1_700_000_000_000.0;
        let log = vec![
            sell("recent", "Bitcoin", 6.5, 100.0, now),
            sell("boundary", "Bitcoin", 7.0, 100.0, now),
            sell("old", "Bitcoin", 7.5, 100.0, now),
        ];

        let recent = filter_transactions(&log, AssetFilter::All, HistoryRange::SevenDays, now);
        let ids: Vec<&str> = recent.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["recent", "boundary"]);
    }

    #[test]
    fn statistics_round_to_one_decimal() {
        let now = 1_700_000_000_000.0;
        let log = vec![
            sell("1", "Bitcoin", 1.0, 45_000.06, now),
            sell("2", "Ethereum", 2.0, 2_400.06, now),
        ];

        let stats = calculate_statistics(&log, HistoryRange::All);
        assert_eq!(stats.total_profit, 47_400.1);
        // 47,400.12 / 10,000,000 * 100 = 0.474..., rounded to 0.5
        assert_eq!(stats.profit_percentage, 0.5);
        assert_eq!(stats.execution_count, 2);
        assert_eq!(stats.period, "all");
    }

    #[test]
    fn statistics_of_losses_report_zero_percentage() {
        let now = 1_700_000_000_000.0;
        let log = vec![sell("1", "Bitcoin", 1.0, -5_000.0, now)];

        let stats = calculate_statistics(&log, HistoryRange::SevenDays);
        assert_eq!(stats.total_profit, -5_000.0);
        assert_eq!(stats.profit_percentage, 0.0);
        assert_eq!(stats.period, "7days");
    }
}
