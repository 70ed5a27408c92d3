use roaring::RoaringTreemap;

use crate::range::IndexRange;

pub mod builder;
pub mod combiner;
pub mod inspector;
pub mod options;

#[cfg(test)]
pub(crate) mod tests;

pub use builder::BacktrackingQueryBuilder;
pub use combiner::{FilterCombiner, ListConcatCombiner, MergeContext, PlainFilterCombiner};
pub use inspector::{RegionInspector, SimpleRegionInspector};
pub use options::QueryOptions;

/// [`RegionInspector::assess`] の判定結果。
///
/// `excess` はノードのうち問い合わせ領域の外にある部分の量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment<F, V> {
    /// ノードは領域と交わらない
    Disjoint { excess: V },
    /// ノードの一部だけが領域に含まれる
    Overlaps { excess: V },
    /// ノード全体を `filter` で受け入れられる
    Covered {
        filter: F,
        potential_over_selectivity: bool,
        excess: V,
    },
}

/// 後段で偽陽性を除くためのフィルタが付いたインデックス区間。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredIndexRange<F, T> {
    index_range: IndexRange<T>,
    filter: F,
    potential_over_selectivity: bool,
}

impl<F, T> FilteredIndexRange<F, T> {
    pub fn new(index_range: IndexRange<T>, filter: F, potential_over_selectivity: bool) -> Self {
        FilteredIndexRange {
            index_range,
            filter,
            potential_over_selectivity,
        }
    }

    pub fn index_range(&self) -> &IndexRange<T> {
        &self.index_range
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// 区間が問い合わせ領域外の点を含みうるかどうか
    pub fn potential_over_selectivity(&self) -> bool {
        self.potential_over_selectivity
    }
}

/// 問い合わせ領域を曲線上の区間の列に分解した結果。区間は昇順に並ぶ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<F, T> {
    ranges: Vec<FilteredIndexRange<F, T>>,
    potential_over_selectivity: bool,
}

impl<F, T: Ord> Query<F, T> {
    pub(crate) fn new(ranges: Vec<FilteredIndexRange<F, T>>) -> Self {
        let potential_over_selectivity = ranges
            .iter()
            .any(FilteredIndexRange::potential_over_selectivity);
        Query {
            ranges,
            potential_over_selectivity,
        }
    }

    pub fn ranges(&self) -> &[FilteredIndexRange<F, T>] {
        &self.ranges
    }

    pub fn into_ranges(self) -> Vec<FilteredIndexRange<F, T>> {
        self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// いずれかの区間が領域外の点を含みうるかどうか
    pub fn potential_over_selectivity(&self) -> bool {
        self.potential_over_selectivity
    }

    /// `index` を含む区間を二分探索で探す。
    pub fn find(&self, index: &T) -> Option<&FilteredIndexRange<F, T>> {
        let position = self
            .ranges
            .partition_point(|range| range.index_range.end() <= index);
        self.ranges
            .get(position)
            .filter(|range| range.index_range.contains(index))
    }

    pub fn contains(&self, index: &T) -> bool {
        self.find(index).is_some()
    }
}

impl<F> Query<F, u64> {
    /// すべての区間に含まれるインデックスを [`RoaringTreemap`] に展開する。
    pub fn to_treemap(&self) -> RoaringTreemap {
        let mut treemap = RoaringTreemap::new();
        for range in &self.ranges {
            treemap.insert_range(*range.index_range.start()..*range.index_range.end());
        }
        treemap
    }
}
