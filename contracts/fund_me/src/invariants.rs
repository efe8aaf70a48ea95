// contracts/fund_me/src/invariants.rs
//
// Property tests for the fixed-point conversion. `convert_to_usd` is
// Env-free, so it can be driven directly without a contract host.

extern crate std;

use proptest::prelude::*;

use crate::price::{convert_to_usd, USD_DECIMALS};
use crate::Error;

const UNIT: i128 = 10i128.pow(USD_DECIMALS);

// Bounds under which the whole pipeline stays inside i128: prices up to
// 10^12 (a million dollars at 8 decimals is 10^14, still fine scaled to
// 7), amounts up to 10^12 base units.
const MAX_PRICE: i128 = 1_000_000_000_000;
const MAX_AMOUNT: i128 = 1_000_000_000_000;

proptest! {
    /// Returns a value or `ArithmeticOverflow` for arbitrary inputs,
    /// never a wrap or a panic.
    #[test]
    fn conversion_never_wraps(
        price in any::<i128>(),
        feed_decimals in 0u32..100,
        amount in any::<i128>(),
    ) {
        let _ = convert_to_usd(price, feed_decimals, amount);
    }

    #[test]
    fn conversion_is_monotone_in_amount(
        price in 1i128..MAX_PRICE,
        feed_decimals in 0u32..18,
        a in 0i128..MAX_AMOUNT,
        b in 0i128..MAX_AMOUNT,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_usd = convert_to_usd(price, feed_decimals, lo).unwrap();
        let hi_usd = convert_to_usd(price, feed_decimals, hi).unwrap();
        prop_assert!(lo_usd <= hi_usd);
    }

    #[test]
    fn zero_amount_converts_to_zero(
        price in 1i128..MAX_PRICE,
        feed_decimals in 0u32..18,
    ) {
        prop_assert_eq!(convert_to_usd(price, feed_decimals, 0).unwrap(), 0);
    }

    /// With the feed already at USD precision the conversion is a plain
    /// scaled product.
    #[test]
    fn matching_decimals_is_plain_product(
        price in 1i128..1_000_000_000,
        amount in 0i128..1_000_000_000,
    ) {
        prop_assert_eq!(
            convert_to_usd(price, USD_DECIMALS, amount).unwrap(),
            price * amount / UNIT
        );
    }
}

// ─── Spot checks ─────────────────────────────────────────

#[test]
fn converts_chainlink_style_answer() {
    // 2000 USD at 8 decimals, one whole 7-decimal token unit.
    assert_eq!(
        convert_to_usd(200_000_000_000, 8, 10_000_000),
        Ok(20_000_000_000)
    );
}

#[test]
fn scales_low_precision_feed_up() {
    // 2000 USD at 2 decimals.
    assert_eq!(convert_to_usd(200_000, 2, 10_000_000), Ok(20_000_000_000));
}

#[test]
fn overflow_is_reported_not_wrapped() {
    assert_eq!(
        convert_to_usd(i128::MAX, 0, 2),
        Err(Error::ArithmeticOverflow)
    );
    assert_eq!(
        convert_to_usd(i128::MAX, USD_DECIMALS, i128::MAX),
        Err(Error::ArithmeticOverflow)
    );
}

#[test]
fn truncates_toward_zero() {
    // An 8-decimal answer loses its last digit when scaled down to
    // 7-decimal USD precision: 1.23e-6 USD per unit reads as 1.2e-6.
    assert_eq!(convert_to_usd(123, 8, 10_000_000), Ok(12));
}
