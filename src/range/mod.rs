use std::fmt::{self, Display};

use crate::bit_vector::BitVector;
use crate::error::Result;

pub mod content;
pub mod home;
pub mod index_range;

#[cfg(test)]
pub(crate) mod tests;

pub use content::Content;
pub use home::{BigUintRangeHome, LongRangeHome, RangeHome, orthotope_overlap, orthotope_volume};
pub use index_range::{BigUintRange, IndexRange, LongRange};

/// 長さが2の累乗で、その長さに整列した区間 `[start, start + 2^level)`。
///
/// 曲線の再帰分割における1つのノード（インデックス側）や、
/// ノードに対応する各次元の座標範囲（直交体側）を表す。
///
/// `start` の下位 `level` ビットは呼び出し側で0にしておくこと。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pow2Range {
    start: BitVector,
    level: usize,
}

impl Pow2Range {
    /// [`Pow2Range`] を生成する。
    ///
    /// ```
    /// # use hilbert_query::{BitVector, Pow2Range};
    /// let range = Pow2Range::new(BitVector::from_u64(6, 0b001000).unwrap(), 3);
    /// assert_eq!(range.to_string(), "001000/3");
    /// ```
    pub fn new(start: BitVector, level: usize) -> Self {
        debug_assert!(level <= start.size());
        debug_assert!(start.next_set_bit(0).is_none_or(|lowest| lowest >= level));
        Pow2Range { start, level }
    }

    /// 区間の始点を返す。
    pub fn start(&self) -> &BitVector {
        &self.start
    }

    /// 区間の長さの指数を返す。
    pub fn level(&self) -> usize {
        self.level
    }

    /// `other` がこの区間に含まれるかどうか。
    ///
    /// ビット列の幅が異なりうるため、両者を `home` の座標型に変換してから
    /// `[start, end)` の端点で比較する。
    ///
    /// ```
    /// # use hilbert_query::{BitVector, LongRangeHome, Pow2Range};
    /// let outer = Pow2Range::new(BitVector::from_u64(6, 8).unwrap(), 3);
    /// let inner = Pow2Range::new(BitVector::from_u64(4, 12).unwrap(), 2);
    /// assert!(outer.encloses(&inner, &LongRangeHome).unwrap());
    /// assert!(!inner.encloses(&outer, &LongRangeHome).unwrap());
    /// ```
    pub fn encloses<H: RangeHome>(&self, other: &Pow2Range, home: &H) -> Result<bool> {
        let outer = home.to_range(self)?;
        let inner = home.to_range(other)?;
        Ok(outer.start() <= inner.start() && inner.end() <= outer.end())
    }

    /// 区間列の `level` の総和を返す。
    pub fn level_sum<'a, I>(ranges: I) -> usize
    where
        I: IntoIterator<Item = &'a Pow2Range>,
    {
        ranges.into_iter().map(Pow2Range::level).sum()
    }
}

impl Display for Pow2Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.level)
    }
}
