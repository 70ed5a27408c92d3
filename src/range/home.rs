use std::fmt::Debug;

use num_bigint::BigUint;

use crate::bit_vector::BitVector;
use crate::error::{Error, Result};
use crate::range::{Content, IndexRange, Pow2Range};

/// ビット列で表された区間と、具体的な座標型の区間とを相互に変換するトレイト。
///
/// 区間の長さや重なりは [`RangeHome::Content`] で測る。
pub trait RangeHome {
    type Point: Ord + Clone + Debug;
    type Content: Content;

    /// [`Pow2Range`] を座標型の区間に変換する。
    fn to_range(&self, range: &Pow2Range) -> Result<IndexRange<Self::Point>>;

    /// 座標値を `size` ビットの [`BitVector`] に変換する。
    fn to_bits(&self, point: &Self::Point, size: usize) -> Result<BitVector>;

    /// 区間に含まれる点の個数を返す。
    fn length(&self, range: &IndexRange<Self::Point>) -> Self::Content;

    /// 2つの区間の共通部分の大きさを返す。
    fn overlap(
        &self,
        a: &IndexRange<Self::Point>,
        b: &IndexRange<Self::Point>,
    ) -> Self::Content {
        match a.intersection(b) {
            Some(common) => self.length(&common),
            None => Self::Content::zero(),
        }
    }
}

/// `u64` 座標の [`RangeHome`]。64ビットに収まらない区間は [`Error::Overflow`] になる。
///
/// 終点も `u64` で表すため、扱えるのは63ビットまでの区間に限られる。
/// 幅がちょうど64ビットのインデックス（例えば `[32, 32]` の空間）では根の区間の終点 `2^64` が収まらないので、
/// [`BigUintRangeHome`] を使うこと。
///
/// ```
/// # use hilbert_query::{BigUintRangeHome, BitVector, Error, LongRangeHome, Pow2Range, RangeHome};
/// let root = Pow2Range::new(BitVector::new(64), 64);
/// assert_eq!(LongRangeHome.to_range(&root), Err(Error::Overflow { bits: 65, capacity: 64 }));
/// assert!(BigUintRangeHome.to_range(&root).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LongRangeHome;

impl RangeHome for LongRangeHome {
    type Point = u64;
    type Content = u64;

    fn to_range(&self, range: &Pow2Range) -> Result<IndexRange<u64>> {
        let start = range.start().to_u64()?;
        let level = range.level();
        if level >= u64::BITS as usize {
            return Err(Error::Overflow {
                bits: level + 1,
                capacity: u64::BITS as usize,
            });
        }
        let end = start.checked_add(1 << level).ok_or(Error::Overflow {
            bits: u64::BITS as usize + 1,
            capacity: u64::BITS as usize,
        })?;
        Ok(IndexRange::new_unchecked(start, end))
    }

    fn to_bits(&self, point: &u64, size: usize) -> Result<BitVector> {
        BitVector::from_u64(size, *point)
    }

    fn length(&self, range: &IndexRange<u64>) -> u64 {
        range.end() - range.start()
    }
}

/// 任意精度座標の [`RangeHome`]。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BigUintRangeHome;

impl RangeHome for BigUintRangeHome {
    type Point = BigUint;
    type Content = BigUint;

    fn to_range(&self, range: &Pow2Range) -> Result<IndexRange<BigUint>> {
        let start = range.start().to_biguint();
        let end = &start + (BigUint::from(1u8) << range.level());
        Ok(IndexRange::new_unchecked(start, end))
    }

    fn to_bits(&self, point: &BigUint, size: usize) -> Result<BitVector> {
        BitVector::from_biguint(size, point)
    }

    fn length(&self, range: &IndexRange<BigUint>) -> BigUint {
        range.end() - range.start()
    }
}

/// 直交体（各次元の区間の組）に含まれる点の個数を返す。
pub fn orthotope_volume<H: RangeHome>(home: &H, orthotope: &[IndexRange<H::Point>]) -> H::Content {
    let mut volume = H::Content::one();
    for range in orthotope {
        volume.multiply_by(&home.length(range));
    }
    volume
}

/// 2つの直交体の共通部分に含まれる点の個数を返す。
///
/// ```
/// # use hilbert_query::{LongRange, LongRangeHome, orthotope_overlap};
/// let a = [LongRange::new(0, 4).unwrap(), LongRange::new(0, 4).unwrap()];
/// let b = [LongRange::new(2, 6).unwrap(), LongRange::new(3, 8).unwrap()];
/// assert_eq!(orthotope_overlap(&LongRangeHome, &a, &b).unwrap(), 2);
/// ```
pub fn orthotope_overlap<H: RangeHome>(
    home: &H,
    a: &[IndexRange<H::Point>],
    b: &[IndexRange<H::Point>],
) -> Result<H::Content> {
    if a.len() != b.len() {
        return Err(Error::SizeMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    let mut overlap = H::Content::one();
    for (x, y) in a.iter().zip(b) {
        let common = home.overlap(x, y);
        if common.is_zero() {
            return Ok(common);
        }
        overlap.multiply_by(&common);
    }
    Ok(overlap)
}
