use std::fmt::{self, Display};

use num_bigint::BigUint;

use crate::error::{Error, Result};

/// 空でない半開区間 `[start, end)`。
///
/// この型は `PartialOrd` / `Ord` を実装しているが、これは始点、終点の順の辞書式比較であり、
/// 主に整列や `BTreeSet` などへの格納のためのものである。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexRange<T> {
    start: T,
    end: T,
}

/// `u64` 座標の区間
pub type LongRange = IndexRange<u64>;

/// 任意精度座標の区間
pub type BigUintRange = IndexRange<BigUint>;

impl<T: Ord> IndexRange<T> {
    /// [`IndexRange`] を生成する。`end <= start` の場合は [`Error::InvalidArgument`] を返す。
    ///
    /// ```
    /// # use hilbert_query::{Error, LongRange};
    /// let range = LongRange::new(2, 6).unwrap();
    /// assert!(range.contains(&5));
    /// assert!(!range.contains(&6));
    /// assert!(matches!(LongRange::new(4, 4), Err(Error::InvalidArgument { .. })));
    /// ```
    pub fn new(start: T, end: T) -> Result<Self> {
        if end <= start {
            return Err(Error::invalid("range end must be greater than its start"));
        }
        Ok(IndexRange { start, end })
    }

    /// 検証済みの端点から生成する
    pub(crate) fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(start < end);
        IndexRange { start, end }
    }

    /// 始点（含む）を返す。
    pub fn start(&self) -> &T {
        &self.start
    }

    /// 終点（含まない）を返す。
    pub fn end(&self) -> &T {
        &self.end
    }

    /// `point` が区間に含まれるかどうか。
    pub fn contains(&self, point: &T) -> bool {
        &self.start <= point && point < &self.end
    }

    /// `other` がこの区間に含まれるかどうか。
    pub fn encloses(&self, other: &IndexRange<T>) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// 2つの区間を覆う最小の区間を返す。
    pub fn span(&self, other: &IndexRange<T>) -> IndexRange<T>
    where
        T: Clone,
    {
        IndexRange {
            start: self.start.clone().min(other.start.clone()),
            end: self.end.clone().max(other.end.clone()),
        }
    }

    /// 共通部分を返す。重ならなければ `None`。
    pub fn intersection(&self, other: &IndexRange<T>) -> Option<IndexRange<T>>
    where
        T: Clone,
    {
        let start = self.start.clone().max(other.start.clone());
        let end = self.end.clone().min(other.end.clone());
        (start < end).then_some(IndexRange { start, end })
    }
}

impl<T: Display> Display for IndexRange<T> {
    /// `"[start, end)"` の形式で表示する。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
