use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - tradable currency pair (closed set)
///
/// The pair decides the price rounding granularity and the minimum order
/// increment. Strings outside the set fail to parse; the gateway reports
/// them as `UNSUPPORTED_PAIR`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum CurrencyPair {
    #[strum(serialize = "BTC/JPY")]
    #[serde(rename = "BTC/JPY")]
    BtcJpy,

    #[strum(serialize = "ETH/JPY")]
    #[serde(rename = "ETH/JPY")]
    EthJpy,
}

impl CurrencyPair {
    /// Rounding granularity for limit prices. A pair without a tick rule
    /// passes prices through unrounded.
    pub fn price_tick(&self) -> Option<f64> {
        match self {
            Self::BtcJpy => Some(1_000_000.0),
            Self::EthJpy => Some(10_000.0),
        }
    }

    /// Smallest order amount accepted for the pair
    pub fn min_amount(&self) -> f64 {
        match self {
            Self::BtcJpy => 0.001,
            Self::EthJpy => 0.01,
        }
    }

    /// Stepper increment, mirrors the minimum amount
    pub fn amount_step(&self) -> f64 {
        self.min_amount()
    }

    /// Asset identifier used by the market-data endpoint
    pub fn asset_id(&self) -> &'static str {
        match self {
            Self::BtcJpy => "bitcoin",
            Self::EthJpy => "ethereum",
        }
    }

    pub fn asset_name(&self) -> &'static str {
        match self {
            Self::BtcJpy => "Bitcoin",
            Self::EthJpy => "Ethereum",
        }
    }

    pub fn base_symbol(&self) -> &'static str {
        match self {
            Self::BtcJpy => "BTC",
            Self::EthJpy => "ETH",
        }
    }
}

/// Value Object - chart period accepted by the market-data endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum ChartPeriod {
    #[strum(serialize = "24h")]
    Day,
    #[strum(serialize = "7d")]
    Week,
    #[strum(serialize = "30d")]
    Month,
    #[strum(serialize = "1y")]
    Year,
}

/// Value Object - time-range shortcut shown above the order-page chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr)]
pub enum TimeFilter {
    #[strum(serialize = "1H")]
    OneHour,
    #[strum(serialize = "24H")]
    TwentyFourHours,
    #[strum(serialize = "7D")]
    SevenDays,
    #[strum(serialize = "30D")]
    ThirtyDays,
    #[strum(serialize = "1Y")]
    OneYear,
}

impl TimeFilter {
    /// Period requested from the gateway. Sub-daily filters are served from
    /// the 24h series; there is no finer-grained endpoint.
    pub fn chart_period(&self) -> ChartPeriod {
        match self {
            Self::OneHour => ChartPeriod::Day,
            Self::TwentyFourHours => ChartPeriod::Day,
            Self::SevenDays => ChartPeriod::Week,
            Self::ThirtyDays => ChartPeriod::Month,
            Self::OneYear => ChartPeriod::Year,
        }
    }
}

impl Default for TimeFilter {
    fn default() -> Self {
        Self::SevenDays
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn pair_table() {
        assert_eq!(CurrencyPair::BtcJpy.price_tick(), Some(1_000_000.0));
        assert_eq!(CurrencyPair::EthJpy.price_tick(), Some(10_000.0));
        assert_eq!(CurrencyPair::BtcJpy.min_amount(), 0.001);
        assert_eq!(CurrencyPair::EthJpy.min_amount(), 0.01);
        assert_eq!(CurrencyPair::BtcJpy.amount_step(), CurrencyPair::BtcJpy.min_amount());
        assert_eq!(CurrencyPair::EthJpy.amount_step(), CurrencyPair::EthJpy.min_amount());
    }

    #[test]
    fn pair_wire_format() {
        assert_eq!(CurrencyPair::BtcJpy.to_string(), "BTC/JPY");
        assert_eq!(CurrencyPair::from_str("ETH/JPY").unwrap(), CurrencyPair::EthJpy);
        assert!(CurrencyPair::from_str("XRP/JPY").is_err());
    }

    #[test]
    fn time_filter_maps_to_period() {
        assert_eq!(TimeFilter::OneHour.chart_period().as_ref(), "24h");
        assert_eq!(TimeFilter::TwentyFourHours.chart_period().as_ref(), "24h");
        assert_eq!(TimeFilter::SevenDays.chart_period().as_ref(), "7d");
        assert_eq!(TimeFilter::ThirtyDays.chart_period().as_ref(), "30d");
        assert_eq!(TimeFilter::OneYear.chart_period().as_ref(), "1y");
    }
}
