use std::fmt::Debug;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// 体積や余剰量などの「大きさ」を表す加法的な量。
///
/// `u64` は飽和演算、[`BigUint`] は厳密な演算で実装されている。
pub trait Content: Clone + Ord + Debug {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;
    fn increase_by(&mut self, other: &Self);
    /// 0を下回る場合は0で止まる
    fn decrease_by(&mut self, other: &Self);
    fn multiply_by(&mut self, other: &Self);
}

impl Content for u64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn increase_by(&mut self, other: &Self) {
        *self = self.saturating_add(*other);
    }

    fn decrease_by(&mut self, other: &Self) {
        *self = self.saturating_sub(*other);
    }

    fn multiply_by(&mut self, other: &Self) {
        *self = self.saturating_mul(*other);
    }
}

impl Content for BigUint {
    fn zero() -> Self {
        Zero::zero()
    }

    fn one() -> Self {
        One::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn increase_by(&mut self, other: &Self) {
        *self += other;
    }

    fn decrease_by(&mut self, other: &Self) {
        if *self <= *other {
            *self = Zero::zero();
        } else {
            *self -= other;
        }
    }

    fn multiply_by(&mut self, other: &Self) {
        *self *= other;
    }
}
