use order_terminal_wasm::domain::market::CurrencyPair;
use order_terminal_wasm::domain::order::{discount_price, round_price, round_to_tick};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn btc_price_lands_on_a_million_boundary(price: u32) -> bool {
    let rounded = round_price(price as f64, CurrencyPair::BtcJpy);
    rounded % 1_000_000.0 == 0.0 && (rounded - price as f64).abs() <= 500_000.0
}

#[quickcheck]
fn eth_price_lands_on_a_ten_thousand_boundary(price: u32) -> bool {
    let rounded = round_price(price as f64, CurrencyPair::EthJpy);
    rounded % 10_000.0 == 0.0 && (rounded - price as f64).abs() <= 5_000.0
}

#[quickcheck]
fn discount_is_the_floored_fraction(price: u32, pct: u8) -> bool {
    let pct = (pct % 100) as f64 + 1.0; // (0, 100]
    let discounted = discount_price(price as f64, pct);
    discounted == (price as f64 * pct / 100.0).floor()
        && discounted <= price as f64
        && discounted.fract() == 0.0
}

#[quickcheck]
fn rounding_without_a_tick_is_identity(price: u32) -> bool {
    let price = price as f64 / 7.0;
    round_to_tick(price, None) == price
}

#[test]
fn reference_examples() {
    assert_eq!(round_price(14_062_621.0, CurrencyPair::BtcJpy), 14_000_000.0);
    assert_eq!(round_price(485_318.0, CurrencyPair::EthJpy), 490_000.0);
    assert_eq!(discount_price(14_000_000.0, 99.0), 13_860_000.0);
}

#[test]
fn half_rounds_away_from_zero() {
    assert_eq!(round_price(13_500_000.0, CurrencyPair::BtcJpy), 14_000_000.0);
    assert_eq!(round_price(485_000.0, CurrencyPair::EthJpy), 490_000.0);
}
