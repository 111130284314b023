//! Unit conversion helpers linked into the MetaCoin contract.
//!
//! Kept free of `soroban-sdk` so it can be linked into any contract crate
//! without pulling a second copy of the host environment.

#![no_std]

/// Converts `amount` into another denomination at `conversion_rate`
/// units per coin.
///
/// Returns `None` when the product does not fit in an `i128`.
pub fn convert(amount: i128, conversion_rate: i128) -> Option<i128> {
    amount.checked_mul(conversion_rate)
}
