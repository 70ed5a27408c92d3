use std::marker::PhantomData;

use crate::error::Result;
use crate::range::Content;

/// 統合の判断に使える、構築中のクエリの状況。
#[derive(Debug, Clone, Copy)]
pub struct MergeContext<'a, V> {
    pub max_ranges: usize,
    /// 現時点で受け入れ済みの区間の数
    pub range_count: usize,
    /// 直前の区間と新しい区間の間にある、問い合わせ領域外の量
    pub gap: &'a V,
    /// これまでに見た領域外の量の合計
    pub total_excess: &'a V,
}

/// 隣り合う区間のフィルタをまとめる方針。
pub trait FilterCombiner<F, V> {
    /// 直前に受け入れた区間 `left` と新しい区間 `right` を任意に統合する。
    ///
    /// `None` を返すと新しい区間は別の区間として追加される。
    fn combine(&self, left: &F, right: &F, context: &MergeContext<'_, V>) -> Result<Option<F>>;

    /// 区間数が上限を超えたときに、2つの区間を強制的にまとめる。
    fn collapse(&self, left: &F, right: &F, gap: &V) -> Result<F>;
}

/// 常に同じフィルタを返す [`FilterCombiner`]。
///
/// 間の余剰量が `max_gap` 以下なら自発的に統合する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainFilterCombiner<F, V> {
    filter: F,
    max_gap: V,
}

impl<F, V> PlainFilterCombiner<F, V> {
    pub fn new(filter: F, max_gap: V) -> Self {
        PlainFilterCombiner { filter, max_gap }
    }
}

impl<F: Clone, V: Content> FilterCombiner<F, V> for PlainFilterCombiner<F, V> {
    fn combine(&self, _left: &F, _right: &F, context: &MergeContext<'_, V>) -> Result<Option<F>> {
        Ok((*context.gap <= self.max_gap).then(|| self.filter.clone()))
    }

    fn collapse(&self, _left: &F, _right: &F, _gap: &V) -> Result<F> {
        Ok(self.filter.clone())
    }
}

/// フィルタの列を連結する [`FilterCombiner`]。
///
/// ```
/// # use hilbert_query::{FilterCombiner, ListConcatCombiner, MergeContext};
/// let combiner = ListConcatCombiner::<&str, u64>::new(0);
/// let context = MergeContext { max_ranges: 4, range_count: 1, gap: &0, total_excess: &3 };
/// let merged = combiner.combine(&vec!["a"], &vec!["b"], &context).unwrap();
/// assert_eq!(merged, Some(vec!["a", "b"]));
///
/// let context = MergeContext { gap: &1, ..context };
/// assert_eq!(combiner.combine(&vec!["a"], &vec!["b"], &context).unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConcatCombiner<T, V> {
    max_gap: V,
    _item: PhantomData<T>,
}

impl<T, V> ListConcatCombiner<T, V> {
    pub fn new(max_gap: V) -> Self {
        ListConcatCombiner {
            max_gap,
            _item: PhantomData,
        }
    }
}

impl<T: Clone, V: Content> FilterCombiner<Vec<T>, V> for ListConcatCombiner<T, V> {
    fn combine(
        &self,
        left: &Vec<T>,
        right: &Vec<T>,
        context: &MergeContext<'_, V>,
    ) -> Result<Option<Vec<T>>> {
        if *context.gap > self.max_gap {
            return Ok(None);
        }
        self.collapse(left, right, context.gap).map(Some)
    }

    fn collapse(&self, left: &Vec<T>, right: &Vec<T>, _gap: &V) -> Result<Vec<T>> {
        Ok(left.iter().chain(right).cloned().collect())
    }
}
