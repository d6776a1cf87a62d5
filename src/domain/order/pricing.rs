use crate::domain::market::CurrencyPair;

/// Round half away from zero to the nearest multiple of `tick`.
/// No tick means no rounding rule: the price passes through unchanged.
/// Non-finite and negative prices are propagated through the same
/// arithmetic rather than rejected.
pub fn round_to_tick(price: f64, tick: Option<f64>) -> f64 {
    match tick {
        Some(tick) => (price / tick).round() * tick,
        None => price,
    }
}

/// Round a limit price to the pair's granularity.
///
/// BTC/JPY rounds to the nearest million, ETH/JPY to the nearest ten
/// thousand.
pub fn round_price(price: f64, pair: CurrencyPair) -> f64 {
    round_to_tick(price, pair.price_tick())
}

/// Price at `percentage` percent of `price`, floored to a whole yen.
///
/// The percentage is not bounds-checked; values above 100 mechanically
/// produce a price above the input.
pub fn discount_price(price: f64, percentage: f64) -> f64 {
    (price * percentage / 100.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn btc_rounds_to_nearest_million() {
        assert_eq!(round_price(14_062_621.0, CurrencyPair::BtcJpy), 14_000_000.0);
        assert_eq!(round_price(14_500_000.0, CurrencyPair::BtcJpy), 15_000_000.0);
        assert_eq!(round_price(0.0, CurrencyPair::BtcJpy), 0.0);
    }

    #[test]
    fn eth_rounds_to_nearest_ten_thousand() {
        assert_eq!(round_price(485_318.0, CurrencyPair::EthJpy), 490_000.0);
        assert_eq!(round_price(484_999.0, CurrencyPair::EthJpy), 480_000.0);
    }

    #[test]
    fn missing_tick_passes_price_through() {
        // A pair without a rounding rule leaves prices untouched.
        assert_eq!(round_to_tick(14_062_621.0, None), 14_062_621.0);
        assert_eq!(round_to_tick(123.456, None), 123.456);
    }

    #[test]
    fn discount_floors_to_whole_yen() {
        assert_eq!(discount_price(14_000_000.0, 99.0), 13_860_000.0);
        assert_eq!(discount_price(485_318.0, 95.0), 461_052.0);
        // Already-integral products still go through the floor.
        assert_eq!(discount_price(100.0, 50.0), 50.0);
    }

    #[test]
    fn discount_above_hundred_percent_raises_the_price() {
        assert_eq!(discount_price(1_000.0, 150.0), 1_500.0);
    }
}
